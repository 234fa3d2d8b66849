//! Synthetic sensor telemetry service
//!
//! There is no real sensor ingestion; the snapshot is regenerated from
//! fixed values on every call, stamped with the current calendar date.

use chrono::Utc;
use shared::SensorReading;

/// Telemetry service returning the current field sensor snapshot
#[derive(Debug, Clone, Copy, Default)]
pub struct TelemetryService;

impl TelemetryService {
    pub fn new() -> Self {
        Self
    }

    /// Snapshot of the two field sensors, captured "today"
    pub fn current_readings(&self) -> Vec<SensorReading> {
        let today = Utc::now().date_naive();
        vec![
            SensorReading {
                sensor_id: "soil-01".to_string(),
                label: "Soil Moisture".to_string(),
                value: 32.4,
                unit: "%".to_string(),
                captured_on: today,
            },
            SensorReading {
                sensor_id: "temp-02".to_string(),
                label: "Ambient Temp".to_string(),
                value: 26.1,
                unit: "°C".to_string(),
                captured_on: today,
            },
        ]
    }
}
