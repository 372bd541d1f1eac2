//! Currency error types.

use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use thiserror::Error;

/// Currency and rate-table errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The rate table has no entry for this code.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(CurrencyCode),

    /// A rate must be strictly positive.
    #[error("Exchange rate for {currency} must be positive, got {rate}")]
    NonPositiveRate {
        /// Offending currency.
        currency: CurrencyCode,
        /// Offending rate.
        rate: Decimal,
    },

    /// The base currency's own entry must equal one.
    #[error("Base currency rate must be 1, got {0}")]
    BaseRateNotOne(Decimal),

    /// The result does not fit in a `Decimal`.
    #[error("Amount is too large to represent")]
    Overflow,
}
