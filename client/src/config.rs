//! Configuration management for the Pharmacy Manager client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides such as `PHARMACY__API__BASE_URL`
//!
//! `PHARMACY_ENVIRONMENT` picks which config file is loaded.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Remote API configuration
    pub api: ApiConfig,

    /// Login used by the dashboard binary
    pub credentials: CredentialsConfig,

    /// Inventory table defaults
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the pharmacy API, without the `/api` suffix
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Rows per page; must be one of the sizes the table offers
    pub page_size: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("PHARMACY_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8080")?
            .set_default("api.timeout_secs", 30)?
            .set_default("credentials.username", "")?
            .set_default("credentials.password", "")?
            .set_default("dashboard.page_size", 8)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (PHARMACY__SECTION__KEY)
            .add_source(
                Environment::with_prefix("PHARMACY")
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
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
        }
    }
}
