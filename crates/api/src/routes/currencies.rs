//! Currency reference data and quick conversion.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use nisab_core::currency::{CURRENCIES, convert, cross_rate, format_money, round_for_display};
use nisab_shared::types::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError, extractors::ApiJson};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/convert", post(convert_amount))
}

/// One entry of the currency list.
#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    /// ISO code.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Display symbol.
    pub symbol: &'static str,
    /// Whether the current rate table can convert this currency.
    pub convertible: bool,
}

/// Request body for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Amount in the source currency.
    pub amount: Decimal,
    /// Source currency.
    pub from: CurrencyCode,
    /// Target currency.
    pub to: CurrencyCode,
}

/// Conversion result.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Amount in the source currency.
    pub amount: Decimal,
    /// Source currency.
    pub from: CurrencyCode,
    /// Target currency.
    pub to: CurrencyCode,
    /// Converted amount, unrounded.
    pub result: Decimal,
    /// Units of `to` per one unit of `from`, 4 decimals.
    pub rate: Decimal,
    /// Result formatted for display.
    pub formatted: String,
}

/// GET `/currencies` - Reference list with convertibility against the current table.
async fn list_currencies(State(state): State<AppState>) -> Json<Vec<CurrencyResponse>> {
    let snapshot = state.rates.current();
    let currencies = CURRENCIES
        .iter()
        .map(|info| CurrencyResponse {
            code: info.code,
            name: info.name,
            symbol: info.symbol,
            convertible: CurrencyCode::new(info.code).is_ok_and(|c| snapshot.rates.contains(&c)),
        })
        .collect();
    Json(currencies)
}

/// POST `/convert` - Convert an amount between two currencies.
async fn convert_amount(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let snapshot = state.rates.current();
    let result = convert(payload.amount, &payload.from, &payload.to, &snapshot.rates)?;
    let rate = cross_rate(&payload.from, &payload.to, &snapshot.rates)?;

    Ok(Json(ConvertResponse {
        formatted: format_money(result, &payload.to),
        rate: round_for_display(rate, 4),
        amount: payload.amount,
        from: payload.from,
        to: payload.to,
        result,
    }))
}
