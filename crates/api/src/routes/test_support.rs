//! Helpers for route tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use nisab_core::currency::RateTable;
use nisab_rates::{
    ExchangeRateStore, InMemoryRateRepository, RateFetchError, RateProvider, RateSnapshot,
};
use nisab_shared::config::ValuationConfig;
use nisab_shared::types::CurrencyCode;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Provider answering every fetch with a fixed result.
pub struct FixedProvider(pub Option<RateTable>);

#[async_trait]
impl RateProvider for FixedProvider {
    async fn fetch_latest(&self, _base: &CurrencyCode) -> Result<RateTable, RateFetchError> {
        self.0
            .clone()
            .ok_or_else(|| RateFetchError::Network("connection refused".to_string()))
    }
}

/// State over the built-in table whose provider always fails.
pub fn test_state() -> AppState {
    state_with(FixedProvider(None), RateSnapshot::fallback())
}

/// State with a custom provider and starting snapshot.
pub fn state_with(provider: FixedProvider, snapshot: RateSnapshot) -> AppState {
    let store = ExchangeRateStore::with_snapshot(
        Arc::new(provider),
        Arc::new(InMemoryRateRepository::new()),
        24,
        snapshot,
    );
    AppState::new(Arc::new(store), ValuationConfig::default())
}

/// The full application router.
pub fn app(state: AppState) -> Router {
    create_router(state)
}

/// Sends a request and returns status plus parsed JSON body.
pub async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Reads a decimal serialized as a JSON string.
pub fn decimal(value: &Value) -> rust_decimal::Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {value}"))
        .parse()
        .unwrap()
}
