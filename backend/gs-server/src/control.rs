use crate::error::Result as ServerErrorResult;

use gs_config::Config;
use gs_control::{
    ContainerCommands, ControlPlane, RconSettings, ShutdownCoordinator, StreamSettings,
    TokioProcessRunner,
};
use gs_core::ContainerRef;

use std::sync::Arc;
use std::time::Duration;

/// Wire the control plane to real child processes according to `config`.
pub fn build_control_plane(
    config: &Config,
    shutdown: ShutdownCoordinator,
) -> ServerErrorResult<(ControlPlane, ContainerRef)> {
    let container = config.container_ref()?;

    let runner = Arc::new(TokioProcessRunner::new(config.command_timeout()));
    let commands = ContainerCommands::new(container.clone(), &config.container.docker_binary);

    let plane = ControlPlane::new(
        runner,
        commands,
        rcon_settings(config),
        stream_settings(config),
        shutdown,
    );

    Ok((plane, container))
}

pub fn rcon_settings(config: &Config) -> RconSettings {
    RconSettings {
        password: config.rcon.password.clone(),
        address: config.rcon.address(),
        binary: config.rcon.binary.clone(),
    }
}

pub fn stream_settings(config: &Config) -> StreamSettings {
    StreamSettings {
        status_interval: Duration::from_secs(config.polling.status_interval_secs),
        start_grace: Duration::from_secs(config.polling.start_grace_secs),
        start_poll_interval: Duration::from_secs(config.polling.start_poll_interval_secs),
        buffer_size: config.polling.stream_buffer_size,
    }
}
