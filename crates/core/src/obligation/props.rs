//! Property-based tests for the obligation rule.
//!
//! - Net wealth floor
//! - Monotonicity in assets
//! - Threshold inclusion

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::{ZAKAT_RATE, calculate};

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// *For any* totals, net wealth is never negative and the amount is
    /// either zero or exactly 2.5% of net wealth.
    #[test]
    fn prop_net_wealth_floor(
        assets in amount(),
        liabilities in amount(),
        threshold in amount(),
    ) {
        let result = calculate(assets, liabilities, threshold);
        prop_assert!(result.net_wealth >= Decimal::ZERO);
        prop_assert!(result.net_wealth >= assets - liabilities);
        if result.above_threshold {
            prop_assert_eq!(result.amount, result.net_wealth * ZAKAT_RATE);
        } else {
            prop_assert_eq!(result.amount, Decimal::ZERO);
        }
    }

    /// *For any* fixed liabilities and threshold, more assets never lower the amount.
    #[test]
    fn prop_obligation_is_monotonic(
        assets in amount(),
        extra in amount(),
        liabilities in amount(),
        threshold in amount(),
    ) {
        let lower = calculate(assets, liabilities, threshold);
        let higher = calculate(assets + extra, liabilities, threshold);
        prop_assert!(higher.amount >= lower.amount);
        prop_assert!(higher.above_threshold || !lower.above_threshold);
    }

    /// *For any* liable net wealth, extra assets strictly raise the amount.
    #[test]
    fn prop_obligation_strictly_increases_above_threshold(
        net in amount(),
        extra in (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        liabilities in amount(),
        threshold in amount(),
    ) {
        let threshold = threshold.min(net);
        let lower = calculate(liabilities + net, liabilities, threshold);
        prop_assert!(lower.above_threshold);

        let higher = calculate(liabilities + net + extra, liabilities, threshold);
        prop_assert!(higher.amount > lower.amount);
        prop_assert_eq!(higher.amount - lower.amount, extra * ZAKAT_RATE);
    }

    /// *For any* threshold, net wealth exactly at the threshold is liable.
    #[test]
    fn prop_threshold_is_inclusive(threshold in amount(), liabilities in amount()) {
        let result = calculate(threshold + liabilities, liabilities, threshold);
        prop_assert_eq!(result.net_wealth, threshold);
        prop_assert!(result.above_threshold);
    }
}
