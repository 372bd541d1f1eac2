//! Exchange rate table.
//!
//! Every rate is expressed as units of that currency per 1 unit of the base
//! currency (USD). A table is only ever replaced as a whole.

use std::collections::BTreeMap;

use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::CurrencyError;

/// Pivot currency for all conversions.
pub const BASE_CURRENCY: &str = "USD";

/// Built-in rates used until the first successful refresh.
const FALLBACK_RATES: &[(&str, i64, u32)] = &[
    ("USD", 1, 0),
    ("EUR", 92, 2),
    ("GBP", 79, 2),
    ("SAR", 375, 2),
    ("AED", 367, 2),
    ("PKR", 280, 0),
    ("INR", 83, 0),
    ("TRY", 32, 0),
    ("IDR", 15700, 0),
    ("MYR", 447, 2),
    ("BDT", 110, 0),
    ("EGP", 48, 0),
    ("CAD", 136, 2),
    ("AUD", 152, 2),
    ("KWD", 31, 2),
    ("QAR", 364, 2),
];

/// Validated mapping from currency code to rate against USD.
///
/// Invariants: every rate is strictly positive and the USD entry is exactly 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<CurrencyCode, Decimal>",
    into = "BTreeMap<CurrencyCode, Decimal>"
)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl RateTable {
    /// Builds a table from `(code, rate)` pairs.
    ///
    /// A missing USD entry is added with rate 1.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::NonPositiveRate` for any rate <= 0 and
    /// `CurrencyError::BaseRateNotOne` if USD is present with a rate other than 1.
    pub fn new(
        rates: impl IntoIterator<Item = (CurrencyCode, Decimal)>,
    ) -> Result<Self, CurrencyError> {
        let mut map = BTreeMap::new();
        for (currency, rate) in rates {
            if rate <= Decimal::ZERO {
                return Err(CurrencyError::NonPositiveRate { currency, rate });
            }
            map.insert(currency, rate);
        }

        let base = CurrencyCode::usd();
        match map.get(&base).copied() {
            Some(rate) if rate != Decimal::ONE => {
                return Err(CurrencyError::BaseRateNotOne(rate));
            }
            Some(_) => {}
            None => {
                map.insert(base, Decimal::ONE);
            }
        }

        Ok(Self { rates: map })
    }

    /// The built-in table used at startup before any refresh.
    #[must_use]
    pub fn fallback() -> Self {
        let rates = FALLBACK_RATES
            .iter()
            .map(|(code, mantissa, scale)| {
                (CurrencyCode::from_static(code), Decimal::new(*mantissa, *scale))
            })
            .collect();
        Self { rates }
    }

    /// Looks up the rate for `currency`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` if the code is not in the table.
    pub fn rate(&self, currency: &CurrencyCode) -> Result<Decimal, CurrencyError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(currency.clone()))
    }

    /// Returns the rate if present.
    #[must_use]
    pub fn get(&self, currency: &CurrencyCode) -> Option<Decimal> {
        self.rates.get(currency).copied()
    }

    /// Returns true if the table can convert `currency`.
    #[must_use]
    pub fn contains(&self, currency: &CurrencyCode) -> bool {
        self.rates.contains_key(currency)
    }

    /// Number of currencies in the table, base included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table is empty. A valid table always holds the base.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates rates in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, &Decimal)> {
        self.rates.iter()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::fallback()
    }
}

impl TryFrom<BTreeMap<CurrencyCode, Decimal>> for RateTable {
    type Error = CurrencyError;

    fn try_from(map: BTreeMap<CurrencyCode, Decimal>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl From<RateTable> for BTreeMap<CurrencyCode, Decimal> {
    fn from(table: RateTable) -> Self {
        table.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::new(s).unwrap()
    }

    #[test]
    fn test_fallback_table() {
        let table = RateTable::fallback();
        assert_eq!(table.len(), 16);
        assert_eq!(table.rate(&code("USD")).unwrap(), Decimal::ONE);
        assert_eq!(table.rate(&code("SAR")).unwrap(), dec!(3.75));
        assert_eq!(table.rate(&code("IDR")).unwrap(), dec!(15700));
        assert_eq!(table.rate(&code("KWD")).unwrap(), dec!(0.31));
    }

    #[test]
    fn test_fallback_satisfies_invariants() {
        let table = RateTable::fallback();
        let rebuilt = RateTable::new(table.iter().map(|(c, r)| (c.clone(), *r))).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_new_inserts_missing_base() {
        let table = RateTable::new([(code("SAR"), dec!(3.75))]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&CurrencyCode::usd()), Some(Decimal::ONE));
    }

    #[test]
    fn test_new_rejects_non_positive_rate() {
        let err = RateTable::new([(code("EUR"), dec!(0))]).unwrap_err();
        assert_eq!(
            err,
            CurrencyError::NonPositiveRate {
                currency: code("EUR"),
                rate: dec!(0),
            }
        );
        assert!(RateTable::new([(code("EUR"), dec!(-0.9))]).is_err());
    }

    #[test]
    fn test_new_rejects_wrong_base_rate() {
        let err = RateTable::new([(code("USD"), dec!(1.01))]).unwrap_err();
        assert_eq!(err, CurrencyError::BaseRateNotOne(dec!(1.01)));
    }

    #[test]
    fn test_unknown_currency() {
        let table = RateTable::fallback();
        assert_eq!(
            table.rate(&code("XYZ")),
            Err(CurrencyError::UnsupportedCurrency(code("XYZ")))
        );
        assert!(!table.contains(&code("XYZ")));
    }

    #[test]
    fn test_deserialize_validates() {
        let table: RateTable = serde_json::from_str(r#"{"USD":1,"SAR":"3.75"}"#).unwrap();
        assert_eq!(table.rate(&code("SAR")).unwrap(), dec!(3.75));

        assert!(serde_json::from_str::<RateTable>(r#"{"SAR":"-1"}"#).is_err());
        assert!(serde_json::from_str::<RateTable>(r#"{"USD":"2"}"#).is_err());
    }
}
