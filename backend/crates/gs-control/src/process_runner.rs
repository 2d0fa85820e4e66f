use crate::{ControlError, Invocation, ProcessOutput, Result as ControlResult};

use std::panic::Location;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use tokio::process::Command;

/// Seam between the control plane and the operating system.
///
/// Every container-engine and query-tool call goes through this trait so the
/// probing, roster and lifecycle logic can be exercised against scripted
/// output.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run one invocation to completion. A non-zero exit is an error.
    async fn run(&self, invocation: &Invocation) -> ControlResult<ProcessOutput>;
}

/// Runs invocations as real child processes with a per-call time budget.
#[derive(Debug, Clone)]
pub struct TokioProcessRunner {
    timeout: Duration,
}

impl TokioProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &Invocation) -> ControlResult<ProcessOutput> {
        debug!("Running {}", invocation);

        let child = Command::new(invocation.program())
            .args(invocation.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // Dropping the future (timeout or aborted caller) must not leave
            // the child behind.
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ControlError::Spawn {
                invocation: invocation.to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ControlError::Timeout {
                invocation: invocation.to_string(),
                timeout_secs: self.timeout.as_secs(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .map_err(|e| ControlError::Spawn {
                invocation: invocation.to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            return Err(ControlError::command_failed(
                invocation.to_string(),
                output.status.code(),
                &stdout,
                &stderr,
            ));
        }

        Ok(ProcessOutput { stdout, stderr })
    }
}
