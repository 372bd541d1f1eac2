//! Mapping from domain errors to JSON error responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nisab_core::currency::CurrencyError;
use nisab_core::valuation::RecordError;
use nisab_rates::RateFetchError;
use nisab_shared::AppError;
use nisab_shared::types::CurrencyCodeError;
use serde_json::json;
use tracing::error;

/// Handler error. Renders as `{ "error": code, "message": text }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<CurrencyError> for ApiError {
    fn from(err: CurrencyError) -> Self {
        match err {
            CurrencyError::UnsupportedCurrency(code) => {
                Self(AppError::UnsupportedCurrency(code.to_string()))
            }
            other => Self(AppError::Validation(other.to_string())),
        }
    }
}

impl From<CurrencyCodeError> for ApiError {
    fn from(err: CurrencyCodeError) -> Self {
        Self(err.into())
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}

impl From<RateFetchError> for ApiError {
    fn from(err: RateFetchError) -> Self {
        Self(AppError::ExternalService(err.to_string()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nisab_shared::types::CurrencyCode;

    #[test]
    fn test_unsupported_currency_maps_to_422() {
        let err = ApiError::from(CurrencyError::UnsupportedCurrency(CurrencyCode::from_static(
            "XYZ",
        )));
        assert_eq!(err.0.status_code(), 422);
        assert_eq!(err.0.error_code(), "UNSUPPORTED_CURRENCY");
    }

    #[test]
    fn test_fetch_error_maps_to_502() {
        let err = ApiError::from(RateFetchError::HttpStatus(500));
        assert_eq!(err.0.status_code(), 502);
    }

    #[test]
    fn test_record_error_maps_to_400() {
        let err = ApiError::from(RecordError::MissingName);
        assert_eq!(err.0.status_code(), 400);
    }

    #[test]
    fn test_response_status() {
        let response = ApiError(AppError::UnsupportedCurrency("XYZ".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
