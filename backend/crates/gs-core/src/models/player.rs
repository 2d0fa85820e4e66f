use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// A single roster entry.
///
/// Serializes as the bare display name so a roster becomes a JSON array of
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player(String);

impl Player {
    /// Create a player from a display name, trimming surrounding whitespace.
    #[track_caller]
    pub fn new<S: AsRef<str>>(name: S) -> CoreErrorResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CoreError::InvalidPlayer {
                message: "player name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
