//! Compliance evaluation. Computed on demand from current totals, never cached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether the obligation is covered, and what is left to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceStatus {
    /// True when paid >= due.
    pub compliant: bool,
    /// `max(0, due - paid)`.
    pub remaining: Decimal,
}

/// Compares qualifying payments against the amount due. Both must be in one currency.
#[must_use]
pub fn evaluate(obligation_due: Decimal, qualifying_total: Decimal) -> ComplianceStatus {
    ComplianceStatus {
        compliant: qualifying_total >= obligation_due,
        remaining: obligation_due
            .saturating_sub(qualifying_total)
            .max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(200), dec!(150), false, dec!(50))]
    #[case(dec!(200), dec!(200), true, dec!(0))]
    #[case(dec!(200), dec!(250), true, dec!(0))]
    #[case(dec!(0), dec!(0), true, dec!(0))]
    fn test_evaluate(
        #[case] due: Decimal,
        #[case] paid: Decimal,
        #[case] compliant: bool,
        #[case] remaining: Decimal,
    ) {
        let status = evaluate(due, paid);
        assert_eq!(status.compliant, compliant);
        assert_eq!(status.remaining, remaining);
    }

    #[test]
    fn test_extreme_amounts_do_not_overflow() {
        let status = evaluate(Decimal::MAX, Decimal::MIN);
        assert!(!status.compliant);
        assert_eq!(status.remaining, Decimal::MAX);
    }
}
