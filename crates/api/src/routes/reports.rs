//! Donation report route.

use axum::{Json, Router, extract::State, routing::post};
use nisab_core::reports::{DonationReport, ReportService};
use nisab_core::valuation::DonationRecord;
use nisab_shared::types::CurrencyCode;
use serde::Deserialize;

use crate::{AppState, error::ApiError, extractors::ApiJson};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/reports/donations", post(donation_report))
}

/// Request body for a donation report.
#[derive(Debug, Deserialize)]
pub struct DonationReportRequest {
    /// Donations to report on.
    pub donations: Vec<DonationRecord>,
    /// Report currency; defaults to the reporting currency.
    pub currency: Option<CurrencyCode>,
}

/// POST `/reports/donations` - Category and currency breakdowns.
async fn donation_report(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DonationReportRequest>,
) -> Result<Json<DonationReport>, ApiError> {
    let currency = state.currency_or_default(payload.currency);
    let snapshot = state.rates.current();
    let report = ReportService::donation_report(&payload.donations, &currency, &snapshot.rates)?;
    Ok(Json(report))
}
