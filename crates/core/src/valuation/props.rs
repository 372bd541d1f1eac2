//! Property-based tests for the valuation aggregator.
//!
//! - Additivity over concatenation
//! - Order independence
//! - Currency invariance

use nisab_shared::types::{CurrencyCode, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::aggregate::total;
use crate::currency::{RateTable, convert};

fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn known_code() -> impl Strategy<Value = CurrencyCode> {
    let codes: Vec<CurrencyCode> = RateTable::fallback().iter().map(|(c, _)| c.clone()).collect();
    prop::sample::select(codes)
}

fn money() -> impl Strategy<Value = Money> {
    (amount(), known_code()).prop_map(|(amount, currency)| Money::new(amount, currency))
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= dec!(0.000001)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* two record sets, total(A ++ B) = total(A) + total(B).
    #[test]
    fn prop_total_is_additive(
        a in prop::collection::vec(money(), 0..10),
        b in prop::collection::vec(money(), 0..10),
        target in known_code(),
    ) {
        let table = RateTable::fallback();
        let joined: Vec<Money> = a.iter().chain(b.iter()).cloned().collect();

        let whole = total(&joined, &target, &table).unwrap();
        let parts = total(&a, &target, &table).unwrap() + total(&b, &target, &table).unwrap();
        prop_assert!(close(whole, parts), "{} != {}", whole, parts);
    }

    /// *For any* record set, reversing the order does not change the total.
    #[test]
    fn prop_total_is_order_independent(
        records in prop::collection::vec(money(), 0..10),
        target in known_code(),
    ) {
        let table = RateTable::fallback();
        let reversed: Vec<Money> = records.iter().rev().cloned().collect();

        let forward = total(&records, &target, &table).unwrap();
        let backward = total(&reversed, &target, &table).unwrap();
        prop_assert!(close(forward, backward));
    }

    /// *For any* record set, converting the USD total to a target equals
    /// totalling in that target directly.
    #[test]
    fn prop_total_is_currency_invariant(
        records in prop::collection::vec(money(), 0..10),
        target in known_code(),
    ) {
        let table = RateTable::fallback();
        let usd = CurrencyCode::usd();

        let in_usd = total(&records, &usd, &table).unwrap();
        let projected = convert(in_usd, &usd, &target, &table).unwrap();
        let direct = total(&records, &target, &table).unwrap();
        prop_assert!(close(projected, direct), "{} != {}", projected, direct);
    }
}
