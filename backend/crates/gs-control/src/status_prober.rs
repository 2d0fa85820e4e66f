use crate::{
    ContainerCommands, ControlError, FailureKind, Metrics, ProcessRunner,
    Result as ControlResult,
};

use gs_core::Status;

use std::sync::Arc;
use std::time::Instant;

use log::{debug, warn};
use serde::Deserialize;

/// The `.State` block of `docker container inspect`
#[derive(Debug, Deserialize)]
struct ContainerState {
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Health", default)]
    health: Option<HealthState>,
}

#[derive(Debug, Deserialize)]
struct HealthState {
    #[serde(rename = "Status")]
    status: String,
}

/// Determines the service's current [`Status`] from the container engine.
///
/// Probing never fails: anything that prevents a definite answer is reported
/// as [`Status::Failed`] and logged.
#[derive(Clone)]
pub struct StatusProber {
    runner: Arc<dyn ProcessRunner>,
    commands: Arc<ContainerCommands>,
    metrics: Metrics,
}

impl StatusProber {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        commands: Arc<ContainerCommands>,
        metrics: Metrics,
    ) -> Self {
        Self {
            runner,
            commands,
            metrics,
        }
    }

    pub async fn probe(&self) -> Status {
        let started = Instant::now();
        let invocation = self.commands.inspect_state();

        let status = match self.runner.run(&invocation).await {
            Ok(output) => status_from_state(&output.stdout).unwrap_or_else(|e| {
                warn!("Unreadable container state: {}", e);
                Status::Failed
            }),
            // A container that was never created or was removed by `down`
            Err(e) if e.kind() == FailureKind::NoSuchContainer => Status::Inactive,
            Err(e) => {
                warn!("Status probe failed: {}", e);
                Status::Failed
            }
        };

        debug!("Probed {}: {}", self.commands.container().name(), status);
        self.metrics.probe_completed(status, started.elapsed());
        status
    }
}

/// Map the engine's state JSON to a [`Status`].
pub(crate) fn status_from_state(payload: &str) -> ControlResult<Status> {
    let state: ContainerState = serde_json::from_str(payload.trim())
        .map_err(|e| ControlError::malformed(format!("container state: {}", e)))?;

    match state.status.as_str() {
        "running" => match state.health.as_ref().map(|h| h.status.as_str()) {
            // No healthcheck configured: running is as good as it gets
            None | Some("none") | Some("") => Ok(Status::Healthy),
            Some("healthy") => Ok(Status::Healthy),
            Some("starting") => Ok(Status::Starting),
            Some("unhealthy") => Ok(Status::Failed),
            Some(other) => Err(ControlError::malformed(format!(
                "unknown health status '{}'",
                other
            ))),
        },
        "restarting" => Ok(Status::Starting),
        "created" | "exited" | "dead" | "removing" => Ok(Status::Inactive),
        "paused" => Ok(Status::Failed),
        other => Err(ControlError::malformed(format!(
            "unknown container status '{}'",
            other
        ))),
    }
}
