//! scrumless-intake library - Demo intake backend
//!
//! HTTP service that records demo-scheduling form submissions in the
//! Record Store and exposes read-only listings of the voice tables
//! written by the external Discord bot.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use scrumless_common::RecordStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Record Store client, created once at startup
    pub store: Arc<RecordStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: RecordStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build application router
///
/// A single configured origin may call the API, with methods GET/POST
/// and headers Content-Type/Authorization.
pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    use axum::routing::{get, post};

    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", get(api::root_status))
        .route("/api/demo/schedule", post(api::schedule_demo))
        .route("/api/transcriptions", get(api::list_transcriptions))
        .route("/api/voice-sessions", get(api::list_voice_sessions))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
