//! Route definitions for the AI Farming Platform
//!
//! The router is the single composition point: every path/method pair is
//! mapped to its handler here, once, at startup.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Sensor telemetry snapshot
        .route("/sensors", get(handlers::list_sensor_readings))
        // Advisory recommendations
        .route("/recommendations", get(handlers::get_recommendations))
        // Yield forecast
        .route("/forecast", post(handlers::forecast_yield))
}
