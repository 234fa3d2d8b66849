//! Yield forecast request/response contracts

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Input for a yield forecast.
///
/// Validated at the HTTP boundary before any computation runs: all numeric
/// fields must be non-negative and soil moisture is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ForecastRequest {
    pub crop: String,

    #[validate(range(min = 0.0))]
    pub area_hectares: f64,

    /// Volumetric soil moisture as a percentage
    #[validate(range(min = 0.0, max = 100.0))]
    pub soil_moisture: f64,

    #[validate(range(min = 0.0))]
    pub expected_rain_mm: f64,
}

/// Computed yield forecast.
///
/// `yield_estimate_tons` and `confidence` are rounded to two decimal places;
/// `confidence` is a bounded heuristic score in `[0, 0.95]`, not a
/// statistical probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub crop: String,
    pub yield_estimate_tons: f64,
    pub confidence: f64,
    pub notes: Vec<String>,
}
