//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A currency code that the current rate table cannot convert.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// External service error (e.g. the exchange rate provider).
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::UnsupportedCurrency(_) => 422,
            Self::ExternalService(_) => 502,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
        }
    }
}

impl From<crate::types::CurrencyCodeError> for AppError {
    fn from(err: crate::types::CurrencyCodeError) -> Self {
        Self::Validation(err.to_string())
    }
}
