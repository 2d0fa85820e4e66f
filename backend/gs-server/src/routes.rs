use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Lifecycle commands
        .route("/start", post(api::lifecycle::start))
        .route("/stop", post(api::lifecycle::stop))
        // Single reads
        .route("/status", get(api::status::status))
        .route("/players", get(api::players::players))
        // SSE streams
        .route("/status/stream", get(api::streams::status_stream))
        .route("/presence", get(api::streams::presence_stream))
        .route("/start/status", get(api::streams::start_status))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/metrics", get(health::metrics))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
