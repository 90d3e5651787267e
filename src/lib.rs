pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod model;
pub mod normalize;
pub mod session;
pub mod store;

use log::debug;

use crate::gateway::RecipeCollection;

/// Fetches every recipe stored behind `base_url` in one call, already
/// normalized into [`model::Recipe`] values.
pub async fn fetch_recipes(base_url: &str) -> Result<Vec<model::Recipe>, error::SyncError> {
    let gateway = gateway::RecipeGateway::new(base_url);
    let recipes = gateway.fetch_all().await?;
    debug!("fetched {} recipes from {}", recipes.len(), base_url);
    Ok(recipes)
}
