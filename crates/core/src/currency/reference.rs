//! Static currency reference metadata (display name and symbol).
//!
//! Purely descriptive. Conversion support is decided by the rate table.

use serde::Serialize;

/// Display metadata for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    /// ISO 4217 code.
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
}

impl CurrencyInfo {
    const fn new(code: &'static str, name: &'static str, symbol: &'static str) -> Self {
        Self { code, name, symbol }
    }
}

/// Every currency the application knows how to display.
pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo::new("USD", "US Dollar", "$"),
    CurrencyInfo::new("EUR", "Euro", "€"),
    CurrencyInfo::new("GBP", "British Pound", "£"),
    CurrencyInfo::new("SAR", "Saudi Riyal", "﷼"),
    CurrencyInfo::new("AED", "UAE Dirham", "د.إ"),
    CurrencyInfo::new("QAR", "Qatari Riyal", "﷼"),
    CurrencyInfo::new("KWD", "Kuwaiti Dinar", "د.ك"),
    CurrencyInfo::new("BHD", "Bahraini Dinar", "د.ب"),
    CurrencyInfo::new("OMR", "Omani Rial", "﷼"),
    CurrencyInfo::new("JOD", "Jordanian Dinar", "د.ا"),
    CurrencyInfo::new("EGP", "Egyptian Pound", "£"),
    CurrencyInfo::new("LBP", "Lebanese Pound", "ل.ل"),
    CurrencyInfo::new("SYP", "Syrian Pound", "£"),
    CurrencyInfo::new("IQD", "Iraqi Dinar", "ع.د"),
    CurrencyInfo::new("MAD", "Moroccan Dirham", "د.م."),
    CurrencyInfo::new("TND", "Tunisian Dinar", "د.ت"),
    CurrencyInfo::new("DZD", "Algerian Dinar", "د.ج"),
    CurrencyInfo::new("LYD", "Libyan Dinar", "ل.د"),
    CurrencyInfo::new("PKR", "Pakistani Rupee", "₨"),
    CurrencyInfo::new("INR", "Indian Rupee", "₹"),
    CurrencyInfo::new("BDT", "Bangladeshi Taka", "৳"),
    CurrencyInfo::new("LKR", "Sri Lankan Rupee", "₨"),
    CurrencyInfo::new("NPR", "Nepalese Rupee", "₨"),
    CurrencyInfo::new("MVR", "Maldivian Rufiyaa", "ރ."),
    CurrencyInfo::new("AFN", "Afghan Afghani", "؋"),
    CurrencyInfo::new("IDR", "Indonesian Rupiah", "Rp"),
    CurrencyInfo::new("MYR", "Malaysian Ringgit", "RM"),
    CurrencyInfo::new("SGD", "Singapore Dollar", "S$"),
    CurrencyInfo::new("BND", "Brunei Dollar", "B$"),
    CurrencyInfo::new("THB", "Thai Baht", "฿"),
    CurrencyInfo::new("TRY", "Turkish Lira", "₺"),
    CurrencyInfo::new("IRR", "Iranian Rial", "﷼"),
    CurrencyInfo::new("AZN", "Azerbaijani Manat", "₼"),
    CurrencyInfo::new("KZT", "Kazakhstani Tenge", "₸"),
    CurrencyInfo::new("UZS", "Uzbekistani Som", "so'm"),
    CurrencyInfo::new("TJS", "Tajikistani Somoni", "ЅМ"),
    CurrencyInfo::new("TMT", "Turkmen Manat", "m"),
    CurrencyInfo::new("KGS", "Kyrgyzstani Som", "с"),
    CurrencyInfo::new("NGN", "Nigerian Naira", "₦"),
    CurrencyInfo::new("ZAR", "South African Rand", "R"),
    CurrencyInfo::new("KES", "Kenyan Shilling", "KSh"),
    CurrencyInfo::new("TZS", "Tanzanian Shilling", "TSh"),
    CurrencyInfo::new("UGX", "Ugandan Shilling", "USh"),
    CurrencyInfo::new("ETB", "Ethiopian Birr", "Br"),
    CurrencyInfo::new("SOS", "Somali Shilling", "Sh"),
    CurrencyInfo::new("SDG", "Sudanese Pound", "£"),
    CurrencyInfo::new("GHS", "Ghanaian Cedi", "₵"),
    CurrencyInfo::new("CHF", "Swiss Franc", "Fr"),
    CurrencyInfo::new("NOK", "Norwegian Krone", "kr"),
    CurrencyInfo::new("SEK", "Swedish Krona", "kr"),
    CurrencyInfo::new("DKK", "Danish Krone", "kr"),
    CurrencyInfo::new("RUB", "Russian Ruble", "₽"),
    CurrencyInfo::new("BAM", "Bosnian Mark", "KM"),
    CurrencyInfo::new("ALL", "Albanian Lek", "L"),
    CurrencyInfo::new("CNY", "Chinese Yuan", "¥"),
    CurrencyInfo::new("JPY", "Japanese Yen", "¥"),
    CurrencyInfo::new("KRW", "South Korean Won", "₩"),
    CurrencyInfo::new("AUD", "Australian Dollar", "A$"),
    CurrencyInfo::new("NZD", "New Zealand Dollar", "NZ$"),
    CurrencyInfo::new("CAD", "Canadian Dollar", "C$"),
    CurrencyInfo::new("MXN", "Mexican Peso", "$"),
    CurrencyInfo::new("BRL", "Brazilian Real", "R$"),
    CurrencyInfo::new("ARS", "Argentine Peso", "$"),
];

/// Finds display metadata for a code (case-insensitive).
#[must_use]
pub fn lookup_currency(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES
        .iter()
        .find(|info| info.code.eq_ignore_ascii_case(code))
}
