//! Report generation service.

use std::collections::BTreeMap;

use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;

use super::types::{CategoryTotal, CurrencyTotal, DonationReport};
use crate::currency::{CurrencyError, RateTable, checked_sum, convert};
use crate::valuation::{DonationCategory, DonationRecord, total_donations, total_qualifying_payments};

/// Service for generating donation reports.
pub struct ReportService;

impl ReportService {
    /// Converted totals per category, in [`DonationCategory::ALL`] order.
    /// Categories with no donations are omitted.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` for any unknown currency.
    pub fn category_breakdown(
        donations: &[DonationRecord],
        target: &CurrencyCode,
        rates: &RateTable,
    ) -> Result<Vec<CategoryTotal>, CurrencyError> {
        let mut totals: BTreeMap<DonationCategory, Decimal> = BTreeMap::new();
        for donation in donations {
            let converted = convert(
                donation.value.amount,
                &donation.value.currency,
                target,
                rates,
            )?;
            let total = totals.entry(donation.category).or_default();
            *total = checked_sum(*total, converted)?;
        }

        Ok(DonationCategory::ALL
            .into_iter()
            .filter_map(|category| {
                totals
                    .get(&category)
                    .filter(|total| !total.is_zero())
                    .map(|total| CategoryTotal {
                        category,
                        total: *total,
                    })
            })
            .collect())
    }

    /// Raw and converted totals per source currency, largest converted value first.
    ///
    /// Ties are ordered by currency code.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` for any unknown currency.
    pub fn currency_breakdown(
        donations: &[DonationRecord],
        target: &CurrencyCode,
        rates: &RateTable,
    ) -> Result<Vec<CurrencyTotal>, CurrencyError> {
        let mut raw: BTreeMap<&CurrencyCode, Decimal> = BTreeMap::new();
        for donation in donations {
            let amount = raw.entry(&donation.value.currency).or_default();
            *amount = checked_sum(*amount, donation.value.amount)?;
        }

        let mut breakdown = raw
            .into_iter()
            .map(|(currency, amount)| {
                Ok(CurrencyTotal {
                    currency: currency.clone(),
                    amount,
                    converted: convert(amount, currency, target, rates)?,
                })
            })
            .collect::<Result<Vec<_>, CurrencyError>>()?;

        // Stable sort keeps code order among equal values.
        breakdown.sort_by(|a, b| b.converted.cmp(&a.converted));
        Ok(breakdown)
    }

    /// Full donation report in `target`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` for any unknown currency.
    pub fn donation_report(
        donations: &[DonationRecord],
        target: &CurrencyCode,
        rates: &RateTable,
    ) -> Result<DonationReport, CurrencyError> {
        Ok(DonationReport {
            currency: target.clone(),
            total_donated: total_donations(donations, target, rates)?,
            qualifying_paid: total_qualifying_payments(donations, target, rates)?,
            by_category: Self::category_breakdown(donations, target, rates)?,
            by_currency: Self::currency_breakdown(donations, target, rates)?,
        })
    }
}
