//! Exchange rate table and refresh routes.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use nisab_core::currency::BASE_CURRENCY;
use nisab_rates::RefreshOutcome;
use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::{AppState, error::ApiError};

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exchange-rates", get(get_rates))
        .route("/exchange-rates/refresh", post(refresh_rates))
}

/// Current rate table with freshness information.
#[derive(Debug, Serialize)]
pub struct RatesResponse {
    /// Pivot currency.
    pub base: &'static str,
    /// Units of each currency per one unit of `base`.
    pub rates: BTreeMap<CurrencyCode, Decimal>,
    /// Time of the last successful refresh; `null` for the built-in table.
    pub last_updated: Option<DateTime<Utc>>,
    /// Hours since the last refresh; `null` if never refreshed.
    pub hours_since_update: Option<f64>,
    /// Whether a refresh is due.
    pub stale: bool,
}

/// Result of a refresh request.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    /// `updated` or `superseded`.
    pub status: &'static str,
    /// Whether the new table was saved.
    pub persisted: bool,
    /// Timestamp of the table now in use.
    pub last_updated: Option<DateTime<Utc>>,
    /// Number of currencies in the table now in use.
    pub currencies: usize,
}

/// GET `/exchange-rates` - Current table.
async fn get_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    let now = Utc::now();
    let snapshot = state.rates.current();
    let hours = snapshot.hours_since_update(now);

    Json(RatesResponse {
        base: BASE_CURRENCY,
        rates: snapshot.rates.clone().into(),
        last_updated: snapshot.last_updated,
        hours_since_update: hours.is_finite().then_some(hours),
        stale: snapshot.is_stale(now, state.rates.stale_after()),
    })
}

/// POST `/exchange-rates/refresh` - Fetch a fresh table from the provider.
async fn refresh_rates(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    let outcome = state.rates.refresh().await.map_err(|e| {
        warn!(error = %e, "Manual exchange rate refresh failed");
        ApiError::from(e)
    })?;

    let (status, persisted) = match outcome {
        RefreshOutcome::Applied { persisted, .. } => ("updated", persisted),
        RefreshOutcome::Superseded => ("superseded", false),
    };
    let current = state.rates.current();
    info!(status, persisted, "Manual exchange rate refresh");

    Ok(Json(RefreshResponse {
        status,
        persisted,
        last_updated: current.last_updated,
        currencies: current.rates.len(),
    }))
}
