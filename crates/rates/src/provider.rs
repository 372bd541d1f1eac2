//! Rate providers.
//!
//! The HTTP provider speaks the exchangerate-api "latest" format:
//! `GET {base_url}/{BASE}` answering `{ "rates": { "EUR": 0.92, ... } }`.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use nisab_core::currency::RateTable;
use nisab_shared::config::RatesConfig;
use nisab_shared::types::CurrencyCode;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::error::RateFetchError;

/// Source of fresh rate tables.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest table, every rate expressed per one unit of `base`.
    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<RateTable, RateFetchError>;
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

/// Rate provider backed by an HTTP JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpRateProvider {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpRateProvider {
    /// Creates a provider for `base_url` with a per-request `timeout`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Creates a provider from the `rates` configuration section.
    #[must_use]
    pub fn from_config(config: &RatesConfig) -> Self {
        Self::new(
            config.provider_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn map_request_error(&self, e: &reqwest::Error) -> RateFetchError {
        if e.is_timeout() {
            RateFetchError::Timeout(self.timeout.as_secs())
        } else if e.is_decode() {
            RateFetchError::MalformedResponse(e.to_string())
        } else {
            RateFetchError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    async fn fetch_latest(&self, base: &CurrencyCode) -> Result<RateTable, RateFetchError> {
        let url = format!("{}/{}", self.base_url, base);
        debug!(url = %url, "Fetching exchange rates");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateFetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_request_error(&e))?;
        let parsed: LatestRatesResponse = serde_json::from_str(&body)
            .map_err(|e| RateFetchError::MalformedResponse(e.to_string()))?;

        parse_rates(parsed.rates)
    }
}

/// Turns raw provider numbers into a validated table.
///
/// Keys that are not currency codes are skipped. Any non-finite or
/// non-positive value rejects the whole response.
fn parse_rates(raw: HashMap<String, f64>) -> Result<RateTable, RateFetchError> {
    if raw.is_empty() {
        return Err(RateFetchError::MalformedResponse(
            "response contains no rates".to_string(),
        ));
    }

    let mut rates = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let Ok(code) = CurrencyCode::new(&key) else {
            debug!(key = %key, "Skipping non-currency rate key");
            continue;
        };
        if !value.is_finite() || value <= 0.0 {
            return Err(RateFetchError::MalformedResponse(format!(
                "rate for {code} is not a positive number: {value}"
            )));
        }
        let rate = Decimal::try_from(value).map_err(|_| {
            RateFetchError::MalformedResponse(format!("rate for {code} is out of range: {value}"))
        })?;
        rates.push((code, rate));
    }

    Ok(RateTable::new(rates)?)
}
