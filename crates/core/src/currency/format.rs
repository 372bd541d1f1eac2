//! Display formatting for money amounts.

use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;

use super::conversion::round_for_display;
use super::reference::lookup_currency;

/// Formats an amount as `<symbol><grouped amount>` with two decimals.
///
/// Falls back to the code itself when no symbol is known, e.g. `XYZ1,000.00`.
#[must_use]
pub fn format_money(amount: Decimal, currency: &CurrencyCode) -> String {
    let symbol = lookup_currency(currency.as_str()).map_or(currency.as_str(), |info| info.symbol);

    let mut rounded = round_for_display(amount, 2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    rounded.set_sign_positive(true);
    rounded.rescale(2);

    let text = rounded.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!("{sign}{symbol}{}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
