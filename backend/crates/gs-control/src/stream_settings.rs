use std::time::Duration;

/// Timing for stream loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    /// Status and presence polling period
    pub status_interval: Duration,
    /// Pause after a start before the first start-wait probe
    pub start_grace: Duration,
    /// Start-wait polling period after the grace period
    pub start_poll_interval: Duration,
    /// Events buffered per connection before the loop waits on the client
    pub buffer_size: usize,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            status_interval: Duration::from_secs(10),
            start_grace: Duration::from_secs(10),
            start_poll_interval: Duration::from_secs(2),
            buffer_size: 16,
        }
    }
}
