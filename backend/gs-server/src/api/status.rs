use crate::AppState;

use axum::extract::State;

/// GET /status - a single probe, as a bare status token
pub async fn status(State(state): State<AppState>) -> &'static str {
    state.control.prober.probe().await.as_str()
}
