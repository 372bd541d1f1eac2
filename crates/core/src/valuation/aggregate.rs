//! Valuation aggregator: sums money-bearing records into one currency.
//!
//! Filtering (e.g. qualifying payments only) is done by the caller before
//! aggregation so that `total` stays single-purpose.

use nisab_shared::types::{CurrencyCode, Money};
use rust_decimal::Decimal;

use super::records::{AssetRecord, DonationRecord};
use crate::currency::{CurrencyError, RateTable, checked_sum, convert};

/// Anything carrying a money amount.
pub trait Valued {
    /// The amount and the currency it is denominated in.
    fn value(&self) -> &Money;
}

impl Valued for Money {
    fn value(&self) -> &Money {
        self
    }
}

impl Valued for AssetRecord {
    fn value(&self) -> &Money {
        &self.value
    }
}

impl Valued for DonationRecord {
    fn value(&self) -> &Money {
        &self.value
    }
}

/// Converts every record into `target` and sums. An empty input yields zero.
///
/// # Errors
///
/// Returns `CurrencyError::UnsupportedCurrency` for the first record whose
/// currency (or the target) is missing from `rates`, and
/// `CurrencyError::Overflow` when the total does not fit in a `Decimal`.
pub fn total<'a, T, I>(records: I, target: &CurrencyCode, rates: &RateTable) -> Result<Decimal, CurrencyError>
where
    T: Valued + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().try_fold(Decimal::ZERO, |sum, record| {
        let money = record.value();
        checked_sum(sum, convert(money.amount, &money.currency, target, rates)?)
    })
}

/// Total value of all assets in `target`.
///
/// # Errors
///
/// See [`total`].
pub fn total_assets(
    assets: &[AssetRecord],
    target: &CurrencyCode,
    rates: &RateTable,
) -> Result<Decimal, CurrencyError> {
    total(assets, target, rates)
}

/// Total value of all donations in `target`, regardless of category.
///
/// # Errors
///
/// See [`total`].
pub fn total_donations(
    donations: &[DonationRecord],
    target: &CurrencyCode,
    rates: &RateTable,
) -> Result<Decimal, CurrencyError> {
    total(donations, target, rates)
}

/// Donations that count toward the Zakat obligation.
pub fn qualifying_payments(
    donations: &[DonationRecord],
) -> impl Iterator<Item = &DonationRecord> {
    donations.iter().filter(|d| d.is_qualifying())
}

/// Total of qualifying Zakat payments in `target`.
///
/// # Errors
///
/// See [`total`].
pub fn total_qualifying_payments(
    donations: &[DonationRecord],
    target: &CurrencyCode,
    rates: &RateTable,
) -> Result<Decimal, CurrencyError> {
    total(qualifying_payments(donations), target, rates)
}
