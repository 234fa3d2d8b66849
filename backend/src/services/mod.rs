//! Business logic services for the AI Farming Platform

pub mod advisory;
pub mod forecast;
pub mod telemetry;

pub use advisory::AdvisoryService;
pub use forecast::ForecastService;
pub use telemetry::TelemetryService;
