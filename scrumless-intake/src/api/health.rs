//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "scrumless-intake".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /
///
/// Plain liveness text, matches what the hosting platform probes.
pub async fn root_status() -> &'static str {
    "Scrumless backend is running"
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
