//! Obligation amount from totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Share of net wealth due once the threshold is reached (2.5%).
pub const ZAKAT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);

/// Result of applying the threshold rule to a pair of totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationResult {
    /// `max(0, assets - liabilities)`.
    pub net_wealth: Decimal,
    /// Whether net wealth meets the threshold (inclusive).
    pub above_threshold: bool,
    /// Amount due; zero below the threshold.
    pub amount: Decimal,
}

/// Applies the threshold rule. All inputs must be in the same currency.
///
/// A zero threshold makes any non-negative net wealth liable. Net wealth
/// saturates at the `Decimal` range instead of overflowing.
#[must_use]
pub fn calculate(
    total_assets: Decimal,
    total_liabilities: Decimal,
    threshold: Decimal,
) -> ObligationResult {
    let net_wealth = total_assets
        .saturating_sub(total_liabilities)
        .max(Decimal::ZERO);
    let above_threshold = net_wealth >= threshold;
    let amount = if above_threshold {
        net_wealth * ZAKAT_RATE
    } else {
        Decimal::ZERO
    };

    ObligationResult {
        net_wealth,
        above_threshold,
        amount,
    }
}
