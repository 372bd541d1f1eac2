//! Report types.

use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::valuation::DonationCategory;

/// Converted total for one donation category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Donation category.
    pub category: DonationCategory,
    /// Total in the report currency.
    pub total: Decimal,
}

/// Total for one source currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyTotal {
    /// Currency the donations were made in.
    pub currency: CurrencyCode,
    /// Sum of amounts as entered.
    pub amount: Decimal,
    /// The same sum in the report currency.
    pub converted: Decimal,
}

/// Donation summary in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationReport {
    /// Report currency.
    pub currency: CurrencyCode,
    /// All donations, any category.
    pub total_donated: Decimal,
    /// Zakat payments only.
    pub qualifying_paid: Decimal,
    /// Per category, zero categories omitted.
    pub by_category: Vec<CategoryTotal>,
    /// Per source currency, largest converted value first.
    pub by_currency: Vec<CurrencyTotal>,
}
