//! Record creation. Validates input and assigns IDs; storage is the caller's concern.

use axum::{Json, Router, http::StatusCode, routing::post};
use chrono::Utc;
use nisab_core::valuation::{AssetRecord, DonationRecord, NewAsset, NewDonation};
use tracing::info;

use crate::{AppState, error::ApiError, extractors::ApiJson};

/// Creates the record routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assets", post(create_asset))
        .route("/donations", post(create_donation))
}

/// POST `/assets` - Build a new asset record.
async fn create_asset(
    ApiJson(payload): ApiJson<NewAsset>,
) -> Result<(StatusCode, Json<AssetRecord>), ApiError> {
    let asset = AssetRecord::create(payload, Utc::now().date_naive())?;
    info!(asset_id = %asset.id, category = ?asset.category, "Asset record created");
    Ok((StatusCode::CREATED, Json(asset)))
}

/// POST `/donations` - Build a new donation record.
async fn create_donation(
    ApiJson(payload): ApiJson<NewDonation>,
) -> Result<(StatusCode, Json<DonationRecord>), ApiError> {
    let donation = DonationRecord::create(payload)?;
    info!(donation_id = %donation.id, category = ?donation.category, "Donation record created");
    Ok((StatusCode::CREATED, Json(donation)))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{app, decimal, send, test_state};
    use axum::http::StatusCode;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_asset() {
        let (status, body) = send(
            app(test_state()),
            "POST",
            "/api/v1/assets",
            Some(json!({
                "name": "Savings account",
                "category": "cash",
                "amount": "2500.00",
                "currency": "eur",
                "hawl_date": "2024-09-01"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].is_string());
        assert_eq!(body["currency"], "EUR");
        assert_eq!(decimal(&body["amount"]), dec!(2500));
        assert_eq!(body["hawl_date"], "2024-09-01");
        assert_eq!(body["is_paid"], false);
    }

    #[tokio::test]
    async fn test_create_asset_rejects_zero_amount() {
        let (status, body) = send(
            app(test_state()),
            "POST",
            "/api/v1/assets",
            Some(json!({
                "name": "Savings",
                "category": "cash",
                "amount": "0",
                "currency": "USD"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_donation() {
        let (status, body) = send(
            app(test_state()),
            "POST",
            "/api/v1/donations",
            Some(json!({
                "amount": "150",
                "currency": "SAR",
                "category": "zakat",
                "recipient": "Food bank",
                "date": "2025-03-10"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["category"], "zakat");
        assert_eq!(body["recipient"], "Food bank");
    }

    #[tokio::test]
    async fn test_create_donation_missing_recipient() {
        let (status, _) = send(
            app(test_state()),
            "POST",
            "/api/v1/donations",
            Some(json!({
                "amount": "150",
                "currency": "SAR",
                "category": "sadaqah",
                "recipient": " ",
                "date": "2025-03-10"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
