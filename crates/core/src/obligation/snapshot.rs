//! Full calculator flow and the immutable calculation record it produces.

use chrono::NaiveDate;
use nisab_shared::types::{CalculationId, CurrencyCode, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::calculator::calculate;
use crate::context::ValuationContext;
use crate::currency::{CurrencyError, checked_sum};
use crate::nisab::NisabBasis;

/// Wealth entered for one calculation, line by line, in the currencies entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBreakdown {
    /// Cash and bank balances.
    pub cash: Money,
    /// Gold held, in grams.
    pub gold_grams: Decimal,
    /// Silver held, in grams.
    pub silver_grams: Decimal,
    /// Shares and funds.
    pub stocks: Money,
    /// Business inventory and receivables.
    pub business: Money,
    /// Property held for trade.
    pub property: Money,
    /// Anything else zakatable.
    pub other: Money,
}

impl AssetBreakdown {
    /// A breakdown with every line zero, monetary lines in `currency`.
    #[must_use]
    pub fn empty(currency: &CurrencyCode) -> Self {
        Self {
            cash: Money::zero(currency.clone()),
            gold_grams: Decimal::ZERO,
            silver_grams: Decimal::ZERO,
            stocks: Money::zero(currency.clone()),
            business: Money::zero(currency.clone()),
            property: Money::zero(currency.clone()),
            other: Money::zero(currency.clone()),
        }
    }

    fn money_lines(&self) -> [&Money; 5] {
        [
            &self.cash,
            &self.stocks,
            &self.business,
            &self.property,
            &self.other,
        ]
    }
}

/// Input to [`ZakatCalculator::calculate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Entered wealth.
    pub assets: AssetBreakdown,
    /// Short-term debts deducted from wealth.
    pub liabilities: Money,
    /// Metal the threshold is measured against.
    pub basis: NisabBasis,
}

/// A saved calculation. Values are fixed at creation and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObligationCalculation {
    id: CalculationId,
    date: NaiveDate,
    currency: CurrencyCode,
    assets: AssetBreakdown,
    liabilities: Decimal,
    basis: NisabBasis,
    threshold: Decimal,
    total_zakatable: Decimal,
    net_wealth: Decimal,
    obligation: Decimal,
    above_threshold: bool,
}

impl ObligationCalculation {
    /// Calculation ID.
    #[must_use]
    pub const fn id(&self) -> CalculationId {
        self.id
    }

    /// Date the calculation was made.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Currency of every derived value.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Wealth as entered.
    #[must_use]
    pub const fn assets(&self) -> &AssetBreakdown {
        &self.assets
    }

    /// Liabilities in the reporting currency.
    #[must_use]
    pub const fn liabilities(&self) -> Decimal {
        self.liabilities
    }

    /// Basis used for the threshold.
    #[must_use]
    pub const fn basis(&self) -> NisabBasis {
        self.basis
    }

    /// Threshold in the reporting currency.
    #[must_use]
    pub const fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Gross assets in the reporting currency, before liabilities.
    #[must_use]
    pub const fn total_zakatable(&self) -> Decimal {
        self.total_zakatable
    }

    /// Assets minus liabilities, floored at zero.
    #[must_use]
    pub const fn net_wealth(&self) -> Decimal {
        self.net_wealth
    }

    /// Amount due.
    #[must_use]
    pub const fn obligation(&self) -> Decimal {
        self.obligation
    }

    /// Whether net wealth met the threshold.
    #[must_use]
    pub const fn above_threshold(&self) -> bool {
        self.above_threshold
    }
}

/// Runs the full calculation against one valuation context.
#[derive(Debug, Clone, Copy)]
pub struct ZakatCalculator<'a> {
    ctx: ValuationContext<'a>,
}

impl<'a> ZakatCalculator<'a> {
    /// Creates a calculator bound to `ctx`.
    #[must_use]
    pub const fn new(ctx: ValuationContext<'a>) -> Self {
        Self { ctx }
    }

    /// Gross value of `assets` in the reporting currency.
    ///
    /// Metal lines are valued at the reference price per gram.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` for any unknown currency.
    pub fn total_assets(&self, assets: &AssetBreakdown) -> Result<Decimal, CurrencyError> {
        let metals = checked_sum(
            self.ctx.metal_value(NisabBasis::Gold, assets.gold_grams)?,
            self.ctx.metal_value(NisabBasis::Silver, assets.silver_grams)?,
        )?;

        assets
            .money_lines()
            .into_iter()
            .try_fold(metals, |sum, line| checked_sum(sum, self.ctx.to_reporting(line)?))
    }

    /// Values `input` and produces a snapshot dated `date`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedCurrency` for any unknown currency.
    pub fn calculate(
        &self,
        input: CalculationInput,
        date: NaiveDate,
    ) -> Result<ObligationCalculation, CurrencyError> {
        let total_zakatable = self.total_assets(&input.assets)?;
        let liabilities = self.ctx.to_reporting(&input.liabilities)?;
        let threshold = self.ctx.threshold(input.basis)?;
        let result = calculate(total_zakatable, liabilities, threshold);

        Ok(ObligationCalculation {
            id: CalculationId::new(),
            date,
            currency: self.ctx.reporting_currency.clone(),
            assets: input.assets,
            liabilities,
            basis: input.basis,
            threshold,
            total_zakatable,
            net_wealth: result.net_wealth,
            obligation: result.amount,
            above_threshold: result.above_threshold,
        })
    }
}
