use crate::{ApiError, ApiResult, AppState};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - service health plus the managed container's status
pub async fn health(State(state): State<AppState>) -> Response {
    let container_status = state.control.prober.probe().await;

    let health = json!({
        "status": if state.shutdown.is_shutdown() { "shutting_down" } else { "healthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "container": {
                "name": state.container.name(),
                "status": container_status,
            },
            "signal_subscribers": state.control.bus.subscriber_count(),
            "metrics": if state.metrics.is_some() { "operational" } else { "disabled" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> ApiResult<String> {
    let handle = state
        .metrics
        .as_ref()
        .ok_or_else(|| ApiError::not_found("metrics recorder is not installed"))?;

    Ok(handle.render())
}
