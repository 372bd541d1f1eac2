//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod compliance;
pub mod currencies;
pub mod exchange_rates;
pub mod health;
pub mod nisab;
pub mod records;
pub mod reports;
pub mod valuation;

#[cfg(test)]
pub(crate) mod test_support;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(currencies::routes())
        .merge(exchange_rates::routes())
        .merge(records::routes())
        .merge(valuation::routes())
        .merge(nisab::routes())
        .merge(compliance::routes())
        .merge(reports::routes())
}
