/// Signals carried on the [`CancellationBus`](crate::CancellationBus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelTopic {
    /// A start action completed successfully
    ServiceStarted,
    /// A stop action completed successfully; aborts in-flight start-waits
    ServiceStopped,
}

impl CancelTopic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceStarted => "service_started",
            Self::ServiceStopped => "service_stopped",
        }
    }
}

impl std::fmt::Display for CancelTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
