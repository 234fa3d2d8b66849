//! Domain models for the AI Farming Platform

mod forecast;
mod recommendation;
mod sensor;

pub use forecast::*;
pub use recommendation::*;
pub use sensor::*;
