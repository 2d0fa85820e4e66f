use crate::{StreamEnd, StreamKind};

use gs_core::{CommandResult, RosterResult, Status};

use std::time::Duration;

use metrics::{counter, gauge, histogram};

/// Metrics collector for control-plane operations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            prefix: "gs_control",
        }
    }

    /// Record a completed status probe
    pub fn probe_completed(&self, status: Status, duration: Duration) {
        counter!(format!("{}_probes_total", self.prefix), "status" => status.as_str())
            .increment(1);
        histogram!(format!("{}_probe_duration_ms", self.prefix))
            .record(duration.as_millis() as f64);
    }

    /// Record a start/stop outcome
    pub fn command_completed(&self, command: &'static str, result: &CommandResult) {
        counter!(
            format!("{}_commands_total", self.prefix),
            "command" => command,
            "result" => result.label()
        )
        .increment(1);
    }

    pub fn roster_completed(&self, result: &RosterResult) {
        counter!(format!("{}_roster_queries_total", self.prefix), "result" => result.label())
            .increment(1);
    }

    pub fn stream_opened(&self, kind: StreamKind) {
        counter!(format!("{}_streams_opened_total", self.prefix), "kind" => kind.as_str())
            .increment(1);
        gauge!(format!("{}_streams_active", self.prefix), "kind" => kind.as_str()).increment(1.0);
    }

    pub fn stream_closed(&self, kind: StreamKind, end: StreamEnd) {
        counter!(
            format!("{}_streams_closed_total", self.prefix),
            "kind" => kind.as_str(),
            "end" => end.as_str()
        )
        .increment(1);
        gauge!(format!("{}_streams_active", self.prefix), "kind" => kind.as_str()).decrement(1.0);
    }

    pub fn event_emitted(&self, kind: StreamKind) {
        counter!(format!("{}_stream_events_total", self.prefix), "kind" => kind.as_str())
            .increment(1);
    }

    pub fn signal_published(&self, topic: &'static str, subscriber_count: usize) {
        counter!(format!("{}_signals_total", self.prefix), "topic" => topic).increment(1);
        gauge!(format!("{}_signal_subscribers", self.prefix)).set(subscriber_count as f64);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
