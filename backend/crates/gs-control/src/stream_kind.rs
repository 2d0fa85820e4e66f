/// The long-lived observations a client can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamKind {
    /// Status token on every transition
    Status,
    /// Status plus player count while healthy
    Presence,
    /// Transitions after a start until healthy, or `cancelled`
    StartWait,
}

impl StreamKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Presence => "presence",
            Self::StartWait => "start_wait",
        }
    }
}

impl std::fmt::Display for StreamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
