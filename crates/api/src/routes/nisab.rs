//! Threshold and obligation routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use nisab_core::ValuationContext;
use nisab_core::nisab::{
    GOLD_NISAB_GRAMS, NisabBasis, NisabThresholds, ReferencePrices, SILVER_NISAB_GRAMS, threshold,
    thresholds,
};
use nisab_core::obligation::{
    AssetBreakdown, CalculationInput, ObligationCalculation, ObligationResult, ZakatCalculator,
    calculate,
};
use nisab_shared::AppError;
use nisab_shared::types::{CurrencyCode, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ApiJson, ApiQuery},
};

/// Creates the threshold and obligation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/nisab", get(get_thresholds))
        .route("/obligation", post(calculate_obligation))
        .route("/calculations", post(create_calculation))
}

/// Query parameters for the threshold lookup.
#[derive(Debug, Deserialize)]
pub struct NisabQuery {
    /// Target currency; defaults to the reporting currency.
    pub currency: Option<CurrencyCode>,
}

/// Both thresholds with the inputs they were derived from.
#[derive(Debug, Serialize)]
pub struct NisabResponse {
    /// Thresholds in the requested currency.
    #[serde(flatten)]
    pub thresholds: NisabThresholds,
    /// Gold weight in grams.
    pub gold_grams: Decimal,
    /// Silver weight in grams.
    pub silver_grams: Decimal,
    /// Reference prices in USD per gram.
    pub prices: ReferencePrices,
}

/// Request body for the totals form of the calculation.
#[derive(Debug, Deserialize)]
pub struct ObligationRequest {
    /// Total assets, in `currency`.
    pub total_assets: Decimal,
    /// Total liabilities, in `currency`.
    #[serde(default)]
    pub total_liabilities: Decimal,
    /// Explicit threshold, in `currency`. Computed from `basis` when absent.
    pub threshold: Option<Decimal>,
    /// Basis for the computed threshold; defaults to gold.
    pub basis: Option<NisabBasis>,
    /// Currency of every amount; defaults to the reporting currency.
    pub currency: Option<CurrencyCode>,
}

/// Result of the totals form.
#[derive(Debug, Serialize)]
pub struct ObligationResponse {
    /// Net wealth, threshold flag and amount due.
    #[serde(flatten)]
    pub result: ObligationResult,
    /// Threshold applied.
    pub threshold: Decimal,
    /// Currency of every amount.
    pub currency: CurrencyCode,
}

/// Request body for a full calculation. Missing lines count as zero.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    /// Cash and bank balances.
    pub cash: Option<Money>,
    /// Gold held, in grams.
    #[serde(default)]
    pub gold_grams: Decimal,
    /// Silver held, in grams.
    #[serde(default)]
    pub silver_grams: Decimal,
    /// Shares and funds.
    pub stocks: Option<Money>,
    /// Business inventory and receivables.
    pub business: Option<Money>,
    /// Property held for trade.
    pub property: Option<Money>,
    /// Anything else zakatable.
    pub other: Option<Money>,
    /// Short-term debts.
    pub liabilities: Option<Money>,
    /// Threshold basis; defaults to gold.
    pub basis: Option<NisabBasis>,
    /// Reporting currency for this calculation.
    pub currency: Option<CurrencyCode>,
}

impl CalculationRequest {
    fn into_input(self, currency: &CurrencyCode) -> Result<CalculationInput, ApiError> {
        let line = |name: &str, money: Option<Money>| {
            let money = money.unwrap_or_else(|| Money::zero(currency.clone()));
            if money.is_negative() {
                return Err(negative(name));
            }
            Ok(money)
        };
        if self.gold_grams < Decimal::ZERO || self.silver_grams < Decimal::ZERO {
            return Err(negative("metal weight"));
        }

        Ok(CalculationInput {
            assets: AssetBreakdown {
                cash: line("cash", self.cash)?,
                gold_grams: self.gold_grams,
                silver_grams: self.silver_grams,
                stocks: line("stocks", self.stocks)?,
                business: line("business", self.business)?,
                property: line("property", self.property)?,
                other: line("other", self.other)?,
            },
            liabilities: line("liabilities", self.liabilities)?,
            basis: self.basis.unwrap_or(NisabBasis::Gold),
        })
    }
}

fn negative(field: &str) -> ApiError {
    ApiError(AppError::Validation(format!("{field} must not be negative")))
}

/// GET `/nisab` - Gold and silver thresholds.
async fn get_thresholds(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<NisabQuery>,
) -> Result<Json<NisabResponse>, ApiError> {
    let currency = state.currency_or_default(query.currency);
    let prices = state.prices();
    let snapshot = state.rates.current();

    Ok(Json(NisabResponse {
        thresholds: thresholds(&prices, &currency, &snapshot.rates)?,
        gold_grams: GOLD_NISAB_GRAMS,
        silver_grams: SILVER_NISAB_GRAMS,
        prices,
    }))
}

/// POST `/obligation` - Obligation from totals.
async fn calculate_obligation(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ObligationRequest>,
) -> Result<Json<ObligationResponse>, ApiError> {
    let currency = state.currency_or_default(payload.currency);
    if payload.total_assets < Decimal::ZERO || payload.total_liabilities < Decimal::ZERO {
        return Err(negative("totals"));
    }
    let threshold = match payload.threshold {
        Some(explicit) => explicit,
        None => {
            let snapshot = state.rates.current();
            threshold(
                payload.basis.unwrap_or(NisabBasis::Gold),
                &state.prices(),
                &currency,
                &snapshot.rates,
            )?
        }
    };

    Ok(Json(ObligationResponse {
        result: calculate(payload.total_assets, payload.total_liabilities, threshold),
        threshold,
        currency,
    }))
}

/// POST `/calculations` - Full calculation producing a snapshot.
async fn create_calculation(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CalculationRequest>,
) -> Result<(StatusCode, Json<ObligationCalculation>), ApiError> {
    let currency = state.currency_or_default(payload.currency.clone());
    let input = payload.into_input(&currency)?;

    let prices = state.prices();
    let snapshot = state.rates.current();
    let ctx = ValuationContext::new(&snapshot.rates, &currency, &prices);
    let calculation = ZakatCalculator::new(ctx).calculate(input, Utc::now().date_naive())?;

    info!(
        calculation_id = %calculation.id(),
        currency = %calculation.currency(),
        above_threshold = calculation.above_threshold(),
        "Obligation calculated"
    );
    Ok((StatusCode::CREATED, Json(calculation)))
}
