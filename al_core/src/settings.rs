use std::path::Path;

use config::Config;
use config::ConfigError;
use config::File;
use serde::Deserialize;

/// Immutable application settings, constructed once at startup and passed
/// explicitly into resolution and valuation.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Fixed RUB-per-USD rate for the local-currency figure.
    #[serde(default = "default_rub_per_usd")]
    pub rub_per_usd: f64,

    /// Fixed USD-per-gram rate for the gold-equivalent figure.
    #[serde(default = "default_usd_per_gold_gram")]
    pub usd_per_gold_gram: f64,

    /// Per-call bound on provider requests, in seconds.
    #[serde(default = "default_quote_timeout_secs")]
    pub quote_timeout_secs: u64,

    /// Price provider origin. Overridden in tests against a stub server.
    #[serde(default = "default_coingecko_base_url")]
    pub coingecko_base_url: String,
}

fn default_rub_per_usd() -> f64 {
    90.0
}

fn default_usd_per_gold_gram() -> f64 {
    70.0
}

fn default_quote_timeout_secs() -> u64 {
    10
}

fn default_coingecko_base_url() -> String {
    "https://api.coingecko.com".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rub_per_usd: default_rub_per_usd(),
            usd_per_gold_gram: default_usd_per_gold_gram(),
            quote_timeout_secs: default_quote_timeout_secs(),
            coingecko_base_url: default_coingecko_base_url(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let config = Config::builder().add_source(File::from(path.as_ref())).build()?;

    config.try_deserialize()
}

/// Load settings with fallback to defaults
pub fn load_config_or_default(path: &str) -> AppConfig {
    match load_config(path) {
        Ok(config) => {
            tracing::info!("Loaded settings from {path}");
            config
        }
        Err(err) => {
            tracing::warn!("Failed to load settings from {}: {}. Using defaults.", path, err);
            AppConfig::default()
        }
    }
}
