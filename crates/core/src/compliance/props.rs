//! Property-based tests for compliance evaluation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::evaluator::evaluate;

fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    /// *For any* due and paid amounts, compliant holds exactly when nothing remains.
    #[test]
    fn prop_compliant_iff_nothing_remains(due in amount(), paid in amount()) {
        let status = evaluate(due, paid);
        prop_assert_eq!(status.compliant, status.remaining.is_zero());
        prop_assert!(status.remaining >= Decimal::ZERO);
    }

    /// *For any* shortfall, paying the remainder makes the status compliant.
    #[test]
    fn prop_paying_remainder_completes(due in amount(), paid in amount()) {
        let status = evaluate(due, paid);
        prop_assert!(evaluate(due, paid + status.remaining).compliant);
    }

    /// *For any* partial payment, the remainder closes the gap exactly.
    #[test]
    fn prop_remaining_plus_paid_equals_due(due in amount(), paid in amount()) {
        let paid = paid.min(due);
        let status = evaluate(due, paid);
        prop_assert_eq!(status.remaining + paid, due);
    }
}
