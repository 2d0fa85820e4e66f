use crate::{AppState, sse};

use gs_control::StreamKind;

use axum::{extract::State, response::IntoResponse};

/// GET /status/stream
pub async fn status_stream(State(state): State<AppState>) -> impl IntoResponse {
    open(&state, StreamKind::Status)
}

/// GET /presence - `status` or `healthy <count>` on every change
pub async fn presence_stream(State(state): State<AppState>) -> impl IntoResponse {
    open(&state, StreamKind::Presence)
}

/// GET /start/status - transitions until healthy, or `cancelled` on stop
pub async fn start_status(State(state): State<AppState>) -> impl IntoResponse {
    open(&state, StreamKind::StartWait)
}

fn open(state: &AppState, kind: StreamKind) -> impl IntoResponse + use<> {
    sse::event_stream(state.control.streams.open(kind), state.keep_alive)
}
