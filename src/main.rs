use log::{debug, error};
use std::env;

use recipe_book_sync::config::SyncConfig;
use recipe_book_sync::gateway::RecipeGateway;
use recipe_book_sync::store::RecipeStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SyncConfig::load()?;
    let gateway = RecipeGateway::new(config.api_url);
    debug!("syncing against {}", gateway.base_url());

    let mut store = RecipeStore::new(gateway);
    store.refresh().await?;

    // With a numeric id argument, print that recipe in full; otherwise
    // list the whole collection.
    let args: Vec<String> = env::args().collect();
    if let Some(raw) = args.get(1) {
        let id: i64 = raw
            .parse()
            .map_err(|_| "the argument must be a numeric recipe id")?;
        match store.get(id) {
            Some(recipe) => {
                println!("{}", recipe.name);
                println!("category: {}", recipe.category.as_wire());
                println!("approximate cost: R$ {:.2}", recipe.approximate_cost);
                println!("ingredients:");
                for item in &recipe.ingredients {
                    println!("  - {}", item);
                }
                println!("instructions: {}", recipe.instructions);
            }
            None => error!("no recipe with id {} on the server", id),
        }
    } else {
        for recipe in store.recipes() {
            println!(
                "#{} {} [{}] R$ {:.2}",
                recipe.id,
                recipe.name,
                recipe.category.as_wire(),
                recipe.approximate_cost
            );
        }
    }

    Ok(())
}
