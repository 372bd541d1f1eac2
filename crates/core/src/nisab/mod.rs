//! Nisab: the minimum net wealth above which Zakat is due.

pub mod threshold;

pub use threshold::{
    GOLD_NISAB_GRAMS, NisabBasis, NisabThresholds, ReferencePrices, SILVER_NISAB_GRAMS, threshold,
    thresholds,
};
