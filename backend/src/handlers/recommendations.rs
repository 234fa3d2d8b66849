//! HTTP handlers for advisory endpoints

use axum::Json;
use shared::Recommendation;

use crate::services::AdvisoryService;

/// Get the current recommendation list
pub async fn get_recommendations() -> Json<Vec<Recommendation>> {
    let service = AdvisoryService::new();
    Json(service.recommendations())
}
