//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for multi-currency:
//! - Conversions are never rounded; totals keep full precision
//! - Only display values are rounded, with banker's rounding (round half to even)
//! - Stored record amounts are never rewritten

use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use super::error::CurrencyError;
use super::rates::{BASE_CURRENCY, RateTable};

/// Converts `amount` from one currency to another by pivoting through USD.
///
/// Same-currency conversion returns `amount` untouched without consulting the table.
///
/// # Errors
///
/// Returns `CurrencyError::UnsupportedCurrency` if either code is missing from `rates`
/// and `CurrencyError::Overflow` if the result does not fit in a `Decimal`.
pub fn convert(
    amount: Decimal,
    from: &CurrencyCode,
    to: &CurrencyCode,
    rates: &RateTable,
) -> Result<Decimal, CurrencyError> {
    if from == to {
        return Ok(amount);
    }

    let in_base = if from.as_str() == BASE_CURRENCY {
        amount
    } else {
        amount
            .checked_div(rates.rate(from)?)
            .ok_or(CurrencyError::Overflow)?
    };

    if to.as_str() == BASE_CURRENCY {
        Ok(in_base)
    } else {
        in_base
            .checked_mul(rates.rate(to)?)
            .ok_or(CurrencyError::Overflow)
    }
}

/// Adds two amounts.
///
/// # Errors
///
/// Returns `CurrencyError::Overflow` if the sum does not fit in a `Decimal`.
pub fn checked_sum(a: Decimal, b: Decimal) -> Result<Decimal, CurrencyError> {
    a.checked_add(b).ok_or(CurrencyError::Overflow)
}

/// Units of `to` obtained for one unit of `from`.
///
/// # Errors
///
/// Returns `CurrencyError::UnsupportedCurrency` if either code is missing from `rates`.
pub fn cross_rate(
    from: &CurrencyCode,
    to: &CurrencyCode,
    rates: &RateTable,
) -> Result<Decimal, CurrencyError> {
    convert(Decimal::ONE, from, to, rates)
}

/// Rounds a value for display using banker's rounding.
#[must_use]
pub fn round_for_display(value: Decimal, decimal_places: u32) -> Decimal {
    value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven)
}
