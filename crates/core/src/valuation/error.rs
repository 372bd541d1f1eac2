//! Record validation errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when building a new asset or donation record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Amount must be greater than zero.
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Asset name is required.
    #[error("Asset name is required")]
    MissingName,

    /// Donation recipient is required.
    #[error("Donation recipient is required")]
    MissingRecipient,
}
