use crate::{
    ContainerCommands, ControlError, FailureKind, Metrics, ProcessRunner, RconSettings,
    StatusProber, parse_roster,
};

use gs_core::{RosterResult, Status};

use std::sync::Arc;

use log::{debug, warn};

/// Lists connected players through the query tool inside the container.
#[derive(Clone)]
pub struct RosterQuery {
    prober: StatusProber,
    runner: Arc<dyn ProcessRunner>,
    commands: Arc<ContainerCommands>,
    rcon: Arc<RconSettings>,
    metrics: Metrics,
}

impl RosterQuery {
    pub fn new(
        prober: StatusProber,
        runner: Arc<dyn ProcessRunner>,
        commands: Arc<ContainerCommands>,
        rcon: RconSettings,
        metrics: Metrics,
    ) -> Self {
        Self {
            prober,
            runner,
            commands,
            rcon: Arc::new(rcon),
            metrics,
        }
    }

    /// Probe, then query the roster if the service is up.
    pub async fn list_players(&self) -> RosterResult {
        let status = self.prober.probe().await;
        self.roster_for(status).await
    }

    /// Query the roster given an already-observed status.
    pub async fn roster_for(&self, status: Status) -> RosterResult {
        let result = if status == Status::Inactive {
            RosterResult::Ignored
        } else {
            self.query().await
        };

        self.metrics.roster_completed(&result);
        result
    }

    async fn query(&self) -> RosterResult {
        let Some(password) = self.rcon.password.as_deref() else {
            let e = ControlError::missing_configuration(
                "rcon password is not configured; roster queries are disabled",
            );
            warn!("{}", e);
            return RosterResult::error(e.detail());
        };

        let invocation = self.commands.list_players(&self.rcon, password);

        match self.runner.run(&invocation).await {
            Ok(output) => {
                let players = parse_roster(&output.stdout);
                debug!("Roster query returned {} player(s)", players.len());
                RosterResult::Players(players)
            }
            Err(e) => match e.kind() {
                // Query port not listening yet, or the container went away
                // between probe and exec
                FailureKind::ConnectionRefused | FailureKind::NoSuchContainer => {
                    debug!("Roster query not possible yet: {}", e.detail());
                    RosterResult::Ignored
                }
                _ => {
                    warn!("Roster query failed: {}", e);
                    RosterResult::error(e.detail())
                }
            },
        }
    }
}
