//! Compliance route.

use axum::{Json, Router, extract::State, routing::post};
use nisab_core::compliance::{ComplianceStatus, evaluate};
use nisab_core::valuation::{DonationRecord, total_qualifying_payments};
use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError, extractors::ApiJson};

/// Creates the compliance routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/compliance", post(evaluate_compliance))
}

/// Request body for a compliance check.
#[derive(Debug, Deserialize)]
pub struct ComplianceRequest {
    /// Amount due, in `currency`.
    pub obligation_due: Decimal,
    /// All logged donations; only qualifying ones are counted.
    pub donations: Vec<DonationRecord>,
    /// Currency of `obligation_due`; defaults to the reporting currency.
    pub currency: Option<CurrencyCode>,
}

/// Compliance result.
#[derive(Debug, Serialize)]
pub struct ComplianceResponse {
    /// Compliance flag and remaining amount.
    #[serde(flatten)]
    pub status: ComplianceStatus,
    /// Obligation that was checked.
    pub obligation_due: Decimal,
    /// Qualifying payments, converted.
    pub qualifying_total: Decimal,
    /// Currency of every amount.
    pub currency: CurrencyCode,
}

/// POST `/compliance` - Compare qualifying payments against the amount due.
async fn evaluate_compliance(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ComplianceRequest>,
) -> Result<Json<ComplianceResponse>, ApiError> {
    let currency = state.currency_or_default(payload.currency);
    let snapshot = state.rates.current();
    let qualifying_total =
        total_qualifying_payments(&payload.donations, &currency, &snapshot.rates)?;

    Ok(Json(ComplianceResponse {
        status: evaluate(payload.obligation_due, qualifying_total),
        obligation_due: payload.obligation_due,
        qualifying_total,
        currency,
    }))
}
