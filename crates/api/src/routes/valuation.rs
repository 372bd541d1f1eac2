//! Valuation routes: totals of asset and donation records in one currency.

use axum::{Json, Router, extract::State, routing::post};
use nisab_core::currency::format_money;
use nisab_core::valuation::{
    AssetRecord, DonationCategory, DonationRecord, total, total_assets, total_qualifying_payments,
};
use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError, extractors::ApiJson};

/// Creates the valuation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/valuation/assets", post(value_assets))
        .route("/valuation/donations", post(value_donations))
}

/// Request body for asset valuation.
#[derive(Debug, Deserialize)]
pub struct AssetValuationRequest {
    /// Records to total.
    pub assets: Vec<AssetRecord>,
    /// Target currency; defaults to the reporting currency.
    pub currency: Option<CurrencyCode>,
}

/// Request body for donation valuation.
#[derive(Debug, Deserialize)]
pub struct DonationValuationRequest {
    /// Records to total.
    pub donations: Vec<DonationRecord>,
    /// Target currency; defaults to the reporting currency.
    pub currency: Option<CurrencyCode>,
    /// Only total this category.
    pub category: Option<DonationCategory>,
}

/// A converted total.
#[derive(Debug, Serialize)]
pub struct TotalResponse {
    /// Currency of `total`.
    pub currency: CurrencyCode,
    /// Sum of the records, unrounded.
    pub total: Decimal,
    /// `total` formatted for display.
    pub formatted: String,
    /// Number of records included.
    pub count: usize,
}

/// Donation totals.
#[derive(Debug, Serialize)]
pub struct DonationTotalResponse {
    /// Total of the selected donations.
    #[serde(flatten)]
    pub selected: TotalResponse,
    /// Qualifying Zakat payments among all donations sent.
    pub qualifying_total: Decimal,
}

/// POST `/valuation/assets` - Total asset value.
async fn value_assets(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AssetValuationRequest>,
) -> Result<Json<TotalResponse>, ApiError> {
    let currency = state.currency_or_default(payload.currency);
    let snapshot = state.rates.current();
    let value = total_assets(&payload.assets, &currency, &snapshot.rates)?;

    Ok(Json(TotalResponse {
        formatted: format_money(value, &currency),
        currency,
        total: value,
        count: payload.assets.len(),
    }))
}

/// POST `/valuation/donations` - Total donations, optionally for one category.
async fn value_donations(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DonationValuationRequest>,
) -> Result<Json<DonationTotalResponse>, ApiError> {
    let currency = state.currency_or_default(payload.currency);
    let snapshot = state.rates.current();

    let selected: Vec<&DonationRecord> = payload
        .donations
        .iter()
        .filter(|d| payload.category.is_none_or(|c| d.category == c))
        .collect();
    let value = total(selected.iter().copied(), &currency, &snapshot.rates)?;
    let qualifying_total =
        total_qualifying_payments(&payload.donations, &currency, &snapshot.rates)?;

    Ok(Json(DonationTotalResponse {
        selected: TotalResponse {
            formatted: format_money(value, &currency),
            currency,
            total: value,
            count: selected.len(),
        },
        qualifying_total,
    }))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, decimal, send, test_state};
    use axum::http::StatusCode;
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};

    fn asset(amount: &str, currency: &str) -> Value {
        json!({
            "id": "0190a5b2-6c1e-7000-8000-000000000001",
            "name": "Holding",
            "category": "cash",
            "amount": amount,
            "currency": currency,
            "date_added": "2025-01-01",
            "hawl_date": "2025-01-01"
        })
    }

    fn donation(amount: &str, currency: &str, category: &str) -> Value {
        json!({
            "id": "0190a5b2-6c1e-7000-8000-000000000002",
            "amount": amount,
            "currency": currency,
            "category": category,
            "recipient": "Charity",
            "date": "2025-02-01"
        })
    }

    #[tokio::test]
    async fn test_value_assets_mixed_currencies() {
        let (status, body) = send(
            app(test_state()),
            "POST",
            "/api/v1/valuation/assets",
            Some(json!({
                "assets": [asset("1000", "USD"), asset("3750", "SAR"), asset("920", "EUR")],
                "currency": "SAR"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["total"]), dec!(11250));
        assert_eq!(body["currency"], "SAR");
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn test_value_assets_defaults_to_reporting_currency() {
        let (_, body) = send(
            app(test_state()),
            "POST",
            "/api/v1/valuation/assets",
            Some(json!({ "assets": [] })),
        )
        .await;

        assert_eq!(body["currency"], "USD");
        assert_eq!(decimal(&body["total"]), dec!(0));
        assert_eq!(body["formatted"], "$0.00");
    }

    #[tokio::test]
    async fn test_value_donations_by_category() {
        let payload = json!({
            "donations": [
                donation("100", "USD", "zakat"),
                donation("375", "SAR", "zakat"),
                donation("500", "USD", "sadaqah"),
            ],
            "category": "sadaqah"
        });
        let (status, body) = send(
            app(test_state()),
            "POST",
            "/api/v1/valuation/donations",
            Some(payload),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(decimal(&body["total"]), dec!(500));
        assert_eq!(body["count"], 1);
        assert_eq!(decimal(&body["qualifying_total"]), dec!(200));
    }

    #[tokio::test]
    async fn test_value_assets_unknown_currency() {
        let (status, body) = send(
            app(test_state()),
            "POST",
            "/api/v1/valuation/assets",
            Some(json!({ "assets": [asset("10", "XYZ")] })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "UNSUPPORTED_CURRENCY");
    }
}
