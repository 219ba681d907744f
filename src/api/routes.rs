//! HTTP API route definitions.

use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    automation, health, memory, overview, prometheus_metrics, root, sessions, tasks,
    token_metrics, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_header_values());

    Router::new()
        .route("/", get(root))
        // Health endpoints
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Dashboard endpoints
        .route("/api/overview", get(overview))
        .route("/api/sessions", get(sessions))
        .route("/api/tasks", get(tasks))
        .route("/api/automation", get(automation))
        .route("/api/memory", get(memory))
        .route("/api/metrics/tokens", get(token_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for the dashboard dev servers.
///
/// Credentials rule out wildcard methods and headers, so both are mirrored
/// from the request instead.
pub fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
