pub mod api;
pub mod app_state;
pub mod control;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod sse;

#[cfg(test)]
mod tests;

pub use api::error::{ApiError, ApiErrorResponse, Result as ApiResult};
pub use app_state::AppState;
pub use control::build_control_plane;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
