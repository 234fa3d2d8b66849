//! Deterministic yield forecast service
//!
//! Computes a closed-form estimate from area, soil moisture, and expected
//! rainfall. Pure and total over the validated input domain.

use shared::{ForecastRequest, ForecastResponse};

/// Projected tons per fully saturated hectare
const YIELD_COEFFICIENT: f64 = 4.5;

/// Baseline confidence before the rainfall adjustment
const BASE_CONFIDENCE: f64 = 0.55;

/// Millimetres of expected rain per point of added confidence
const RAIN_CONFIDENCE_DIVISOR: f64 = 200.0;

/// Upper bound on reported confidence
const MAX_CONFIDENCE: f64 = 0.95;

/// Forecast service computing the yield estimate and confidence score
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastService;

impl ForecastService {
    pub fn new() -> Self {
        Self
    }

    /// Compute a yield forecast for a validated request.
    ///
    /// Identical input produces identical output; the crop name is
    /// echoed back unchanged.
    pub fn forecast(&self, request: ForecastRequest) -> ForecastResponse {
        let yield_estimate =
            request.area_hectares * (request.soil_moisture / 100.0) * YIELD_COEFFICIENT;
        let confidence =
            (BASE_CONFIDENCE + request.expected_rain_mm / RAIN_CONFIDENCE_DIVISOR).min(MAX_CONFIDENCE);

        ForecastResponse {
            crop: request.crop,
            yield_estimate_tons: round2(yield_estimate),
            confidence: round2(confidence),
            notes: advisory_notes(),
        }
    }
}

/// Fixed advisory notes attached to every forecast
fn advisory_notes() -> Vec<String> {
    vec![
        "Forecast assumes stable temperature range.".to_string(),
        "Review irrigation schedule if rainfall shifts >20mm.".to_string(),
    ]
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn request(area: f64, moisture: f64, rain: f64) -> ForecastRequest {
        ForecastRequest {
            crop: "maize".to_string(),
            area_hectares: area,
            soil_moisture: moisture,
            expected_rain_mm: rain,
        }
    }

    #[test]
    fn test_worked_example() {
        let response = ForecastService::new().forecast(request(10.0, 50.0, 30.0));

        assert_eq!(response.crop, "maize");
        assert_eq!(response.yield_estimate_tons, 22.5);
        assert_eq!(response.confidence, 0.7);
        assert_eq!(response.notes.len(), 2);
    }

    #[test]
    fn test_confidence_capped() {
        // 200mm of rain would push the raw score to 1.55
        let response = ForecastService::new().forecast(request(1.0, 50.0, 200.0));
        assert_eq!(response.confidence, 0.95);
    }

    #[test]
    fn test_zero_area_yields_zero() {
        let response = ForecastService::new().forecast(request(0.0, 80.0, 10.0));
        assert_eq!(response.yield_estimate_tons, 0.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // 3.3 * 0.333 * 4.5 = 4.944...
        let response = ForecastService::new().forecast(request(3.3, 33.3, 0.0));
        assert_eq!(response.yield_estimate_tons, 4.94);
        assert_eq!(response.confidence, 0.55);
    }

    #[test]
    fn test_forecast_is_idempotent() {
        let service = ForecastService::new();
        let first = service.forecast(request(12.5, 42.0, 18.0));
        let second = service.forecast(request(12.5, 42.0, 18.0));
        assert_eq!(first, second);
    }

    #[test]
    fn test_notes_are_fixed() {
        let a = ForecastService::new().forecast(request(1.0, 10.0, 0.0));
        let b = ForecastService::new().forecast(request(99.0, 90.0, 500.0));
        assert_eq!(a.notes, b.notes);
    }

    proptest! {
        #[test]
        fn prop_confidence_bounded(rain in 0.0f64..10_000.0) {
            let response = ForecastService::new().forecast(request(1.0, 50.0, rain));
            prop_assert!(response.confidence >= 0.0);
            prop_assert!(response.confidence <= 0.95);
        }

        #[test]
        fn prop_yield_matches_formula(
            area in 0.0f64..1_000.0,
            moisture in 0.0f64..100.0,
        ) {
            let response = ForecastService::new().forecast(request(area, moisture, 0.0));
            let expected = round2(area * (moisture / 100.0) * YIELD_COEFFICIENT);
            prop_assert_eq!(response.yield_estimate_tons, expected);
        }
    }
}
