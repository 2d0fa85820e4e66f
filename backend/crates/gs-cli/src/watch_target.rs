use clap::ValueEnum;

/// Streams `gs watch` can follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WatchTarget {
    /// Status and player count
    Presence,
    /// Status transitions only
    Status,
    /// Progress of a start until healthy
    Start,
}

impl WatchTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Presence => "/presence",
            Self::Status => "/status/stream",
            Self::Start => "/start/status",
        }
    }
}
