//! Axum route handlers for currency lookups.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::currency::resolver::{
    location_from_value, resolve_currency_icon, resolve_currency_symbol, CurrencyIcon,
    CurrencySymbol,
};

#[derive(Debug, Deserialize)]
pub struct CurrencyQuery {
    pub location: Option<String>,
}

/// Body for the POST variant. `location` may be any JSON value; only strings are used.
#[derive(Debug, Deserialize)]
pub struct CurrencyRequest {
    #[serde(default)]
    pub location: Value,
}

#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    pub symbol: CurrencySymbol,
    pub icon: CurrencyIcon,
}

impl CurrencyResponse {
    fn for_location(location: Option<&str>) -> Self {
        Self {
            symbol: resolve_currency_symbol(location),
            icon: resolve_currency_icon(location),
        }
    }
}

/// GET /api/v1/currency?location=...
pub async fn handle_get_currency(Query(params): Query<CurrencyQuery>) -> Json<CurrencyResponse> {
    Json(CurrencyResponse::for_location(params.location.as_deref()))
}

/// POST /api/v1/currency
pub async fn handle_resolve_currency(Json(req): Json<CurrencyRequest>) -> Json<CurrencyResponse> {
    Json(CurrencyResponse::for_location(location_from_value(&req.location)))
}
