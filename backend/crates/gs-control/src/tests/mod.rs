mod lifecycle_controller;

use crate::{
    ContainerCommands, ControlPlane, RconSettings, ScriptedRunner, ShutdownCoordinator,
    StreamSettings,
};

use gs_core::ContainerRef;

use std::sync::Arc;

pub(crate) const CONTAINER: &str = "server-1";
pub(crate) const PASSWORD: &str = "hunter2";

pub(crate) struct Fixture {
    pub runner: Arc<ScriptedRunner>,
    pub plane: ControlPlane,
    pub shutdown: ShutdownCoordinator,
}

pub(crate) fn fixture() -> Fixture {
    fixture_with_password(Some(PASSWORD))
}

pub(crate) fn fixture_with_password(password: Option<&str>) -> Fixture {
    let runner = Arc::new(ScriptedRunner::new());
    let shutdown = ShutdownCoordinator::new();
    let commands = ContainerCommands::new(
        ContainerRef::new(CONTAINER, "/srv/game/compose.yaml"),
        "docker",
    );
    let rcon = RconSettings {
        password: password.map(str::to_string),
        address: "127.0.0.1:27015".to_string(),
        binary: "rcon".to_string(),
    };

    let plane = ControlPlane::new(
        runner.clone(),
        commands,
        rcon,
        StreamSettings::default(),
        shutdown.clone(),
    );

    Fixture {
        runner,
        plane,
        shutdown,
    }
}
