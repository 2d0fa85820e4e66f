//! REST API error types
//!
//! Every error renders as `{"error": "<message>", "code": "<CODE>"}` with a
//! matching HTTP status.

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "CONFLICT", "COMMAND_FAILED")
    pub code: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was a no-op in the current state (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// An external command failed (500)
    #[error("Command failed: {message} {location}")]
    CommandFailed {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not available (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        ApiError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn command_failed<S: Into<String>>(message: S) -> Self {
        ApiError::CommandFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Conflict { .. } | ApiError::NotFound { .. } => log::info!("{}", self),
            ApiError::CommandFailed { .. } => log::error!("{}", self),
        }

        let (status, code, message) = match self {
            ApiError::Conflict { message, .. } => (StatusCode::CONFLICT, "CONFLICT", message),
            ApiError::CommandFailed { message, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "COMMAND_FAILED", message)
            }
            ApiError::NotFound { message, .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", message),
        };

        (
            status,
            Json(ApiErrorResponse {
                error: message,
                code: code.to_string(),
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
