use serde::Serialize;

/// Outcome of a start or stop request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum CommandResult {
    /// The external action ran and succeeded
    Success,
    /// The service was already in the requested state; nothing was run
    Ignored,
    /// The external action failed
    Error { detail: String },
}

impl CommandResult {
    pub fn error<S: Into<String>>(detail: S) -> Self {
        Self::Error {
            detail: detail.into(),
        }
    }

    /// Short label used for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Ignored => "ignored",
            Self::Error { .. } => "error",
        }
    }
}
