//! Configuration management for the Inventory Monitoring Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with INVENTORY__ prefix, nested keys
//!    joined by `__` (e.g. `INVENTORY__API__BASE_URL`)
//!
//! The environment name itself comes from `INVENTORY_ENVIRONMENT`.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main dashboard configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Inventory service configuration
    pub api: ApiConfig,

    /// Logging configuration
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the inventory service
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Default tracing filter, overridden by RUST_LOG
    pub filter: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("INVENTORY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", ApiConfig::default().base_url)?
            .set_default("log.filter", "inventory_dashboard=info")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (INVENTORY__API__BASE_URL)
            .add_source(
                Environment::with_prefix("INVENTORY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:5000");
    }

    #[test]
    fn test_load_has_defaults() {
        let config = Config::load().unwrap();
        assert!(!config.api.base_url.is_empty());
        assert!(!config.log.filter.is_empty());
    }
}
