//! Health check endpoint handler.

use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Application version
    pub version: String,
    /// Timestamp of the check (RFC 3339)
    pub timestamp: String,
}

/// Creates health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health
///
/// Liveness only; the store is not probed.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::pkg_version().to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
    })
}
