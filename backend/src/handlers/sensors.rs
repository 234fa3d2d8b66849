//! HTTP handlers for sensor telemetry endpoints

use axum::Json;
use shared::SensorReading;

use crate::services::TelemetryService;

/// List the current sensor readings
pub async fn list_sensor_readings() -> Json<Vec<SensorReading>> {
    let service = TelemetryService::new();
    Json(service.current_readings())
}
