//! HTTP handlers for the yield forecast endpoint

use axum::Json;
use shared::{ForecastRequest, ForecastResponse};

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::services::ForecastService;

/// Compute a yield forecast for a validated request
pub async fn forecast_yield(
    ValidatedJson(input): ValidatedJson<ForecastRequest>,
) -> AppResult<Json<ForecastResponse>> {
    let service = ForecastService::new();
    Ok(Json(service.forecast(input)))
}
