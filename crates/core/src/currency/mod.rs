//! Multi-currency handling: reference metadata, rate tables and conversion.

pub mod conversion;
pub mod error;
pub mod format;
pub mod rates;
pub mod reference;

#[cfg(test)]
mod props;

pub use conversion::{checked_sum, convert, cross_rate, round_for_display};
pub use error::CurrencyError;
pub use format::format_money;
pub use rates::{BASE_CURRENCY, RateTable};
pub use reference::{CURRENCIES, CurrencyInfo, lookup_currency};
