//! Shared types and models for the AI Farming Platform
//!
//! This crate contains the request/response contracts and domain models
//! shared between the backend and other components of the system.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
