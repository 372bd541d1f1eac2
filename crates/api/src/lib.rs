//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes under `/api/v1`
//! - Request extractors with JSON error bodies
//! - The mapping from domain errors to HTTP responses

pub mod error;
pub mod extractors;
pub mod routes;

use axum::Router;
use nisab_core::nisab::ReferencePrices;
use nisab_rates::ExchangeRateStore;
use nisab_shared::config::ValuationConfig;
use nisab_shared::types::CurrencyCode;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Exchange rate store.
    pub rates: Arc<ExchangeRateStore>,
    /// Reporting currency and metal reference prices.
    pub valuation: Arc<ValuationConfig>,
}

impl AppState {
    /// Creates the state.
    #[must_use]
    pub fn new(rates: Arc<ExchangeRateStore>, valuation: ValuationConfig) -> Self {
        Self {
            rates,
            valuation: Arc::new(valuation),
        }
    }

    /// Metal prices from configuration.
    #[must_use]
    pub fn prices(&self) -> ReferencePrices {
        ReferencePrices::from(self.valuation.as_ref())
    }

    /// The requested currency, or the configured reporting currency.
    #[must_use]
    pub fn currency_or_default(&self, requested: Option<CurrencyCode>) -> CurrencyCode {
        requested.unwrap_or_else(|| self.valuation.reporting_currency.clone())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
