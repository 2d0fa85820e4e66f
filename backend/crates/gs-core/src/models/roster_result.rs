use crate::Player;

/// Outcome of a roster query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterResult {
    /// Connected players in the order the query tool reported them
    Players(Vec<Player>),
    /// Server is not running, or its query port is not accepting connections yet
    Ignored,
    /// The query failed or could not be issued
    Error { detail: String },
}

impl RosterResult {
    pub fn error<S: Into<String>>(detail: S) -> Self {
        Self::Error {
            detail: detail.into(),
        }
    }

    /// Number of players, when the query produced a roster
    pub fn player_count(&self) -> Option<usize> {
        match self {
            Self::Players(players) => Some(players.len()),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Players(_) => "players",
            Self::Ignored => "ignored",
            Self::Error { .. } => "error",
        }
    }
}
