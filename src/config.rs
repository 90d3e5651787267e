use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Synchronizer configuration
#[derive(Debug, Deserialize, Clone)]
pub struct SyncConfig {
    /// Base URL of the recipe collection endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

// Default value functions
fn default_api_url() -> String {
    "https://receitasapi-b-2025.vercel.app/receitas".to_string()
}

impl SyncConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOOK__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOOK__API_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_BOOK__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_BOOK__API_URL
pub fn load_config() -> Result<SyncConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with RECIPE_BOOK prefix
        // Use double underscore for nested: RECIPE_BOOK__API_URL
        .add_source(
            Environment::with_prefix("RECIPE_BOOK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
