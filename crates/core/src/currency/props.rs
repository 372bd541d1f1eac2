//! Property-based tests for currency conversion.
//!
//! - Identity conversion
//! - Round-trip conversion
//! - Pivot consistency

use nisab_shared::types::CurrencyCode;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::conversion::convert;
use super::rates::RateTable;

/// Strategy to generate amounts (0.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 100000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy picking one of the fallback table's codes.
fn known_code() -> impl Strategy<Value = CurrencyCode> {
    let codes: Vec<CurrencyCode> = RateTable::fallback().iter().map(|(c, _)| c.clone()).collect();
    prop::sample::select(codes)
}

fn table_with(x: Decimal, y: Decimal) -> RateTable {
    RateTable::new([
        (CurrencyCode::from_static("AAA"), x),
        (CurrencyCode::from_static("BBB"), y),
    ])
    .unwrap()
}

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= dec!(0.0000001)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount and known currency, converting to itself returns the amount exactly.
    #[test]
    fn prop_identity_conversion(amount in amount(), code in known_code()) {
        let result = convert(amount, &code, &code, &RateTable::fallback()).unwrap();
        prop_assert_eq!(result, amount);
    }

    /// *For any* amount and pair of rates, x -> y -> x returns the amount within tolerance.
    #[test]
    fn prop_round_trip_conversion(
        amount in amount(),
        x in positive_rate(),
        y in positive_rate(),
    ) {
        let table = table_with(x, y);
        let a = CurrencyCode::from_static("AAA");
        let b = CurrencyCode::from_static("BBB");

        let there = convert(amount, &a, &b, &table).unwrap();
        let back = convert(there, &b, &a, &table).unwrap();
        prop_assert!(close(back, amount), "{} -> {} -> {}", amount, there, back);
    }

    /// *For any* amount, converting directly equals converting via USD explicitly.
    #[test]
    fn prop_direct_equals_via_base(
        amount in amount(),
        from in known_code(),
        to in known_code(),
    ) {
        let table = RateTable::fallback();
        let usd = CurrencyCode::usd();

        let direct = convert(amount, &from, &to, &table).unwrap();
        let in_usd = convert(amount, &from, &usd, &table).unwrap();
        let via_base = convert(in_usd, &usd, &to, &table).unwrap();
        prop_assert!(close(direct, via_base));
    }

    /// *For any* non-negative amount, conversion never produces a negative result.
    #[test]
    fn prop_conversion_preserves_sign(
        amount in amount(),
        from in known_code(),
        to in known_code(),
    ) {
        let result = convert(amount, &from, &to, &RateTable::fallback()).unwrap();
        prop_assert!(result >= Decimal::ZERO);
    }
}
