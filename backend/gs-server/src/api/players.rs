use crate::{ApiError, ApiResult, AppState};

use gs_core::{Player, RosterResult};

use axum::{Json, extract::State};

/// GET /players - JSON array of connected player names
pub async fn players(State(state): State<AppState>) -> ApiResult<Json<Vec<Player>>> {
    match state.control.roster.list_players().await {
        RosterResult::Players(players) => Ok(Json(players)),
        RosterResult::Ignored => Err(ApiError::conflict("Server is not accepting roster queries")),
        RosterResult::Error { detail } => Err(ApiError::command_failed(detail)),
    }
}
