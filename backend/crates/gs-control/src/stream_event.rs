use gs_core::Status;

/// Combined observation emitted by presence streams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceSnapshot {
    pub status: Status,
    /// Present exactly when healthy
    pub player_count: Option<usize>,
}

impl std::fmt::Display for PresenceSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player_count {
            Some(count) => write!(f, "{} {}", self.status, count),
            None => write!(f, "{}", self.status),
        }
    }
}

/// One item pushed to a stream's client.
///
/// `Display` renders the wire payload: a status token, `status count`, or
/// `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEvent {
    Status(Status),
    Presence(PresenceSnapshot),
    Cancelled,
}

impl std::fmt::Display for StreamEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status(status) => write!(f, "{}", status),
            Self::Presence(snapshot) => write!(f, "{}", snapshot),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}
