//! Threshold calculation from metal weights and reference prices.

use nisab_shared::config::ValuationConfig;
use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyError, RateTable, convert};

/// Gold nisab weight in grams.
pub const GOLD_NISAB_GRAMS: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Silver nisab weight in grams.
pub const SILVER_NISAB_GRAMS: Decimal = Decimal::from_parts(595, 0, 0, false, 0);

/// Metal the threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NisabBasis {
    /// 85 g of gold.
    Gold,
    /// 595 g of silver.
    Silver,
}

impl NisabBasis {
    /// Fixed weight in grams for this basis.
    #[must_use]
    pub const fn grams(self) -> Decimal {
        match self {
            Self::Gold => GOLD_NISAB_GRAMS,
            Self::Silver => SILVER_NISAB_GRAMS,
        }
    }
}

/// Metal prices per gram, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePrices {
    /// Gold price per gram.
    pub gold_per_gram: Decimal,
    /// Silver price per gram.
    pub silver_per_gram: Decimal,
}

impl ReferencePrices {
    /// Price per gram of the given metal.
    #[must_use]
    pub const fn per_gram(&self, basis: NisabBasis) -> Decimal {
        match basis {
            NisabBasis::Gold => self.gold_per_gram,
            NisabBasis::Silver => self.silver_per_gram,
        }
    }
}

impl Default for ReferencePrices {
    fn default() -> Self {
        Self::from(&ValuationConfig::default())
    }
}

impl From<&ValuationConfig> for ReferencePrices {
    fn from(config: &ValuationConfig) -> Self {
        Self {
            gold_per_gram: config.gold_price_per_gram,
            silver_per_gram: config.silver_price_per_gram,
        }
    }
}

/// Both thresholds in one currency. Choosing between them is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisabThresholds {
    /// Currency of both values.
    pub currency: CurrencyCode,
    /// Gold-based threshold.
    pub gold: Decimal,
    /// Silver-based threshold.
    pub silver: Decimal,
}

impl NisabThresholds {
    /// Threshold for the given basis.
    #[must_use]
    pub const fn for_basis(&self, basis: NisabBasis) -> Decimal {
        match basis {
            NisabBasis::Gold => self.gold,
            NisabBasis::Silver => self.silver,
        }
    }
}

/// Threshold for `basis` expressed in `target`: `grams * price_per_gram`, converted from USD.
///
/// # Errors
///
/// Returns `CurrencyError::UnsupportedCurrency` if `target` is not in `rates`.
pub fn threshold(
    basis: NisabBasis,
    prices: &ReferencePrices,
    target: &CurrencyCode,
    rates: &RateTable,
) -> Result<Decimal, CurrencyError> {
    let in_usd = basis
        .grams()
        .checked_mul(prices.per_gram(basis))
        .ok_or(CurrencyError::Overflow)?;
    convert(in_usd, &CurrencyCode::usd(), target, rates)
}

/// Gold and silver thresholds in `target`.
///
/// # Errors
///
/// Returns `CurrencyError::UnsupportedCurrency` if `target` is not in `rates`.
pub fn thresholds(
    prices: &ReferencePrices,
    target: &CurrencyCode,
    rates: &RateTable,
) -> Result<NisabThresholds, CurrencyError> {
    Ok(NisabThresholds {
        currency: target.clone(),
        gold: threshold(NisabBasis::Gold, prices, target, rates)?,
        silver: threshold(NisabBasis::Silver, prices, target, rates)?,
    })
}
