//! Valuation context passed explicitly into every calculator.

use nisab_shared::types::{CurrencyCode, Money};
use rust_decimal::Decimal;

use crate::currency::{CurrencyError, RateTable, convert};
use crate::nisab::{NisabBasis, NisabThresholds, ReferencePrices, threshold, thresholds};

/// Everything a calculation reads besides its own input: one rate table
/// snapshot, the currency results are reported in, and metal prices.
#[derive(Debug, Clone, Copy)]
pub struct ValuationContext<'a> {
    /// Rate table snapshot used for the whole call.
    pub rates: &'a RateTable,
    /// Currency every result is expressed in.
    pub reporting_currency: &'a CurrencyCode,
    /// Metal reference prices in USD per gram.
    pub prices: &'a ReferencePrices,
}

impl<'a> ValuationContext<'a> {
    /// Creates a context.
    #[must_use]
    pub const fn new(
        rates: &'a RateTable,
        reporting_currency: &'a CurrencyCode,
        prices: &'a ReferencePrices,
    ) -> Self {
        Self {
            rates,
            reporting_currency,
            prices,
        }
    }

    /// Converts `money` into the reporting currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` if either currency is unknown.
    pub fn to_reporting(&self, money: &Money) -> Result<Decimal, CurrencyError> {
        convert(money.amount, &money.currency, self.reporting_currency, self.rates)
    }

    /// Value of `grams` of the given metal in the reporting currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` if the reporting currency is unknown
    /// and `CurrencyError::Overflow` if the value does not fit in a `Decimal`.
    pub fn metal_value(&self, metal: NisabBasis, grams: Decimal) -> Result<Decimal, CurrencyError> {
        let in_usd = grams
            .checked_mul(self.prices.per_gram(metal))
            .ok_or(CurrencyError::Overflow)?;
        convert(in_usd, &CurrencyCode::usd(), self.reporting_currency, self.rates)
    }

    /// Threshold for `basis` in the reporting currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` if the reporting currency is unknown.
    pub fn threshold(&self, basis: NisabBasis) -> Result<Decimal, CurrencyError> {
        threshold(basis, self.prices, self.reporting_currency, self.rates)
    }

    /// Both thresholds in the reporting currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` if the reporting currency is unknown.
    pub fn thresholds(&self) -> Result<NisabThresholds, CurrencyError> {
        thresholds(self.prices, self.reporting_currency, self.rates)
    }
}
