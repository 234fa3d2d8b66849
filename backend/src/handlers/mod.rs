//! HTTP handlers for the AI Farming Platform

pub mod forecast;
pub mod health;
pub mod recommendations;
pub mod sensors;

pub use forecast::forecast_yield;
pub use health::health_check;
pub use recommendations::get_recommendations;
pub use sensors::list_sensor_readings;
