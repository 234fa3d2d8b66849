//! Sensor telemetry models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single sensor reading stamped with the calendar date it was captured on.
///
/// Readings are synthetic and regenerated per request; `captured_on`
/// serializes as ISO-8601 (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub sensor_id: String,
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub captured_on: NaiveDate,
}
