//! Zakat obligation: net wealth against the threshold, and calculation snapshots.

pub mod calculator;
pub mod snapshot;

#[cfg(test)]
mod props;

pub use calculator::{ObligationResult, ZAKAT_RATE, calculate};
pub use snapshot::{AssetBreakdown, CalculationInput, ObligationCalculation, ZakatCalculator};
