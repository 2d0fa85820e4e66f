use crate::{
    CancellationBus, ContainerCommands, LifecycleController, Metrics, ProcessRunner,
    RconSettings, RosterQuery, ShutdownCoordinator, StatusProber, StreamBroadcaster,
    StreamSettings,
};

use std::sync::Arc;

/// All control-plane components, wired to one runner and one bus.
#[derive(Clone)]
pub struct ControlPlane {
    pub prober: StatusProber,
    pub roster: RosterQuery,
    pub controller: LifecycleController,
    pub streams: StreamBroadcaster,
    pub bus: CancellationBus,
}

impl ControlPlane {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        commands: ContainerCommands,
        rcon: RconSettings,
        settings: StreamSettings,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        let metrics = Metrics::new();
        let commands = Arc::new(commands);
        let bus = CancellationBus::new(metrics.clone());

        let prober = StatusProber::new(runner.clone(), commands.clone(), metrics.clone());
        let roster = RosterQuery::new(
            prober.clone(),
            runner.clone(),
            commands.clone(),
            rcon,
            metrics.clone(),
        );
        let controller =
            LifecycleController::new(prober.clone(), runner, commands, bus.clone(), metrics.clone());
        let streams = StreamBroadcaster::new(
            prober.clone(),
            roster.clone(),
            bus.clone(),
            shutdown,
            settings,
            metrics,
        );

        Self {
            prober,
            roster,
            controller,
            streams,
            bus,
        }
    }
}
