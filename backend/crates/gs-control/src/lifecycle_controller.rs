use crate::{
    CancelTopic, CancellationBus, ContainerCommands, Invocation, Metrics, ProcessRunner,
    StatusProber,
};

use gs_core::{CommandResult, Status};

use std::sync::Arc;

use log::{error, info};
use tokio::sync::Mutex;

/// Arbitrates start/stop requests against the probed status.
///
/// Commands are serialized: a second request waits for the first to finish
/// its probe and action before probing itself.
#[derive(Clone)]
pub struct LifecycleController {
    prober: StatusProber,
    runner: Arc<dyn ProcessRunner>,
    commands: Arc<ContainerCommands>,
    bus: CancellationBus,
    metrics: Metrics,
    command_lock: Arc<Mutex<()>>,
}

impl LifecycleController {
    pub fn new(
        prober: StatusProber,
        runner: Arc<dyn ProcessRunner>,
        commands: Arc<ContainerCommands>,
        bus: CancellationBus,
        metrics: Metrics,
    ) -> Self {
        Self {
            prober,
            runner,
            commands,
            bus,
            metrics,
            command_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Bring the service up unless it is already starting or healthy.
    pub async fn start(&self) -> CommandResult {
        let _serialized = self.command_lock.lock().await;

        let status = self.prober.probe().await;
        let result = if status.is_running() {
            info!("Start ignored: service is {}", status);
            CommandResult::Ignored
        } else {
            self.act(
                "start",
                self.commands.compose_up(),
                CancelTopic::ServiceStarted,
            )
            .await
        };

        self.metrics.command_completed("start", &result);
        result
    }

    /// Take the service down unless it is already inactive.
    pub async fn stop(&self) -> CommandResult {
        let _serialized = self.command_lock.lock().await;

        let status = self.prober.probe().await;
        let result = if status == Status::Inactive {
            info!("Stop ignored: service is {}", status);
            CommandResult::Ignored
        } else {
            self.act(
                "stop",
                self.commands.compose_down(),
                CancelTopic::ServiceStopped,
            )
            .await
        };

        self.metrics.command_completed("stop", &result);
        result
    }

    async fn act(
        &self,
        command: &str,
        invocation: Invocation,
        on_success: CancelTopic,
    ) -> CommandResult {
        info!("Running {} for {}", command, self.commands.container());

        match self.runner.run(&invocation).await {
            Ok(_) => {
                self.bus.signal(on_success);
                info!("{} of {} succeeded", command, self.commands.container().name());
                CommandResult::Success
            }
            Err(e) => {
                error!("{} of {} failed: {}", command, self.commands.container().name(), e);
                CommandResult::error(e.detail())
            }
        }
    }
}
