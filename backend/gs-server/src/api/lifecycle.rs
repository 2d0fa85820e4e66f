use crate::{ApiError, ApiResult, AppState};

use gs_core::CommandResult;

use axum::{extract::State, http::StatusCode};

/// POST /start
pub async fn start(State(state): State<AppState>) -> ApiResult<StatusCode> {
    into_response(
        state.control.controller.start().await,
        "Server is already starting or running",
    )
}

/// POST /stop
///
/// A successful stop also cancels open start-wait streams.
pub async fn stop(State(state): State<AppState>) -> ApiResult<StatusCode> {
    into_response(
        state.control.controller.stop().await,
        "Server is not running",
    )
}

fn into_response(result: CommandResult, ignored_message: &str) -> ApiResult<StatusCode> {
    match result {
        CommandResult::Success => Ok(StatusCode::NO_CONTENT),
        CommandResult::Ignored => Err(ApiError::conflict(ignored_message)),
        CommandResult::Error { detail } => Err(ApiError::command_failed(detail)),
    }
}
