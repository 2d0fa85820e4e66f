use crate::FailureKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Longest stderr excerpt carried into user-facing details
const MAX_DETAIL_LEN: usize = 512;

#[derive(Error, Debug)]
pub enum ControlError {
    #[error("Failed to launch `{invocation}`: {source} {location}")]
    Spawn {
        invocation: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("`{invocation}` timed out after {timeout_secs}s {location}")]
    Timeout {
        invocation: String,
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("`{invocation}` failed ({kind}, exit code {exit_code:?}): {stderr} {location}")]
    CommandFailed {
        invocation: String,
        exit_code: Option<i32>,
        stderr: String,
        kind: FailureKind,
        location: ErrorLocation,
    },

    #[error("Malformed output: {message} {location}")]
    MalformedOutput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing configuration: {message} {location}")]
    MissingConfiguration {
        message: String,
        location: ErrorLocation,
    },
}

impl ControlError {
    /// Build a failure for a command that ran but exited unsuccessfully,
    /// classifying it from its exit code and output.
    #[track_caller]
    pub fn command_failed(
        invocation: String,
        exit_code: Option<i32>,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        let kind = FailureKind::classify(exit_code, stdout, stderr);
        // Some tools report errors on stdout only.
        let diagnostic = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };

        ControlError::CommandFailed {
            invocation,
            exit_code,
            stderr: diagnostic.to_string(),
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        ControlError::MalformedOutput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_configuration<S: Into<String>>(message: S) -> Self {
        ControlError::MissingConfiguration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Structured classification of this failure
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                FailureKind::ToolMissing
            }
            Self::Timeout { .. } => FailureKind::TimedOut,
            Self::CommandFailed { kind, .. } => *kind,
            _ => FailureKind::Other,
        }
    }

    /// Client-facing description, without source locations
    pub fn detail(&self) -> String {
        match self {
            Self::Spawn {
                invocation, source, ..
            } => format!("failed to launch `{}`: {}", invocation, source),
            Self::Timeout {
                invocation,
                timeout_secs,
                ..
            } => format!("`{}` timed out after {}s", invocation, timeout_secs),
            Self::CommandFailed {
                invocation,
                exit_code,
                stderr,
                ..
            } => {
                let code = exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                format!(
                    "`{}` exited with {}: {}",
                    invocation,
                    code,
                    truncate(stderr, MAX_DETAIL_LEN)
                )
            }
            Self::MalformedOutput { message, .. } => format!("malformed output: {}", message),
            Self::MissingConfiguration { message, .. } => message.clone(),
        }
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub type Result<T> = std::result::Result<T, ControlError>;
