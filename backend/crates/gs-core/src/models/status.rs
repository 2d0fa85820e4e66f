use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Externally observed health of the managed container.
///
/// Recomputed on every probe, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No such container is running
    #[default]
    Inactive,
    /// Container is up and its health check has not passed yet
    Starting,
    /// Container health check passes
    Healthy,
    /// The probe itself failed, or the health check reports unhealthy
    Failed,
}

impl Status {
    /// Wire token used in plain-text and SSE responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Starting => "starting",
            Self::Healthy => "healthy",
            Self::Failed => "failed",
        }
    }

    /// True while the container is booting or serving.
    ///
    /// A start request in one of these states is a no-op.
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Starting | Self::Healthy)
    }
}

impl FromStr for Status {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "inactive" => Ok(Self::Inactive),
            "starting" => Ok(Self::Starting),
            "healthy" => Ok(Self::Healthy),
            "failed" => Ok(Self::Failed),
            _ => Err(CoreError::InvalidStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
