//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::CurrencyCode;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Exchange rate provider and store configuration.
    pub rates: RatesConfig,
    /// Valuation defaults (reporting currency, metal reference prices).
    pub valuation: ValuationConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RatesConfig {
    /// Provider endpoint; the base currency code is appended as the last path segment.
    pub provider_url: String,
    /// Timeout for a single refresh request.
    pub timeout_secs: u64,
    /// Age after which the rate table is considered stale.
    pub stale_after_hours: u64,
    /// How often the server checks whether a refresh is due.
    pub refresh_check_secs: u64,
    /// Where the last good rate snapshot is kept. `None` keeps it in memory only.
    pub snapshot_path: Option<String>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            provider_url: "https://api.exchangerate-api.com/v4/latest".to_string(),
            timeout_secs: 10,
            stale_after_hours: 24,
            refresh_check_secs: 3600,
            snapshot_path: None,
        }
    }
}

/// Valuation defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Currency that totals and thresholds are reported in.
    pub reporting_currency: CurrencyCode,
    /// Gold price per gram in USD.
    pub gold_price_per_gram: Decimal,
    /// Silver price per gram in USD.
    pub silver_price_per_gram: Decimal,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            reporting_currency: CurrencyCode::usd(),
            gold_price_per_gram: Decimal::new(7550, 2),
            silver_price_per_gram: Decimal::new(95, 2),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NISAB").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
