use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Polling constraints
pub const MIN_STATUS_INTERVAL_SECS: u64 = 1;
pub const MAX_STATUS_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_STATUS_INTERVAL_SECS: u64 = 10;

pub const MAX_START_GRACE_SECS: u64 = 600;
pub const DEFAULT_START_GRACE_SECS: u64 = 10;

pub const MIN_START_POLL_INTERVAL_SECS: u64 = 1;
pub const MAX_START_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_START_POLL_INTERVAL_SECS: u64 = 2;

pub const MIN_COMMAND_TIMEOUT_SECS: u64 = 1;
pub const MAX_COMMAND_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 30;

pub const MIN_STREAM_BUFFER_SIZE: usize = 1;
pub const MAX_STREAM_BUFFER_SIZE: usize = 1024;
pub const DEFAULT_STREAM_BUFFER_SIZE: usize = 16;

/// Timing of probes, streams and external commands
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Interval between probes on status and presence streams
    pub status_interval_secs: u64,
    /// Quiet period after a start before the start-wait loop probes
    pub start_grace_secs: u64,
    /// Interval between probes once the start-wait loop is polling
    pub start_poll_interval_secs: u64,
    /// Upper bound on any single external command
    pub command_timeout_secs: u64,
    /// Events buffered per stream before the loop waits on the client
    pub stream_buffer_size: usize,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            status_interval_secs: DEFAULT_STATUS_INTERVAL_SECS,
            start_grace_secs: DEFAULT_START_GRACE_SECS,
            start_poll_interval_secs: DEFAULT_START_POLL_INTERVAL_SECS,
            command_timeout_secs: DEFAULT_COMMAND_TIMEOUT_SECS,
            stream_buffer_size: DEFAULT_STREAM_BUFFER_SIZE,
        }
    }
}

impl PollingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.status_interval_secs < MIN_STATUS_INTERVAL_SECS
            || self.status_interval_secs > MAX_STATUS_INTERVAL_SECS
        {
            return Err(ConfigError::polling(format!(
                "polling.status_interval_secs must be {}-{}, got {}",
                MIN_STATUS_INTERVAL_SECS, MAX_STATUS_INTERVAL_SECS, self.status_interval_secs
            )));
        }

        if self.start_grace_secs > MAX_START_GRACE_SECS {
            return Err(ConfigError::polling(format!(
                "polling.start_grace_secs must be 0-{}, got {}",
                MAX_START_GRACE_SECS, self.start_grace_secs
            )));
        }

        if self.start_poll_interval_secs < MIN_START_POLL_INTERVAL_SECS
            || self.start_poll_interval_secs > MAX_START_POLL_INTERVAL_SECS
        {
            return Err(ConfigError::polling(format!(
                "polling.start_poll_interval_secs must be {}-{}, got {}",
                MIN_START_POLL_INTERVAL_SECS,
                MAX_START_POLL_INTERVAL_SECS,
                self.start_poll_interval_secs
            )));
        }

        if self.command_timeout_secs < MIN_COMMAND_TIMEOUT_SECS
            || self.command_timeout_secs > MAX_COMMAND_TIMEOUT_SECS
        {
            return Err(ConfigError::polling(format!(
                "polling.command_timeout_secs must be {}-{}, got {}",
                MIN_COMMAND_TIMEOUT_SECS, MAX_COMMAND_TIMEOUT_SECS, self.command_timeout_secs
            )));
        }

        if self.stream_buffer_size < MIN_STREAM_BUFFER_SIZE
            || self.stream_buffer_size > MAX_STREAM_BUFFER_SIZE
        {
            return Err(ConfigError::polling(format!(
                "polling.stream_buffer_size must be {}-{}, got {}",
                MIN_STREAM_BUFFER_SIZE, MAX_STREAM_BUFFER_SIZE, self.stream_buffer_size
            )));
        }

        Ok(())
    }
}
