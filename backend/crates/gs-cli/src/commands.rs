use gs_cli::WatchTarget;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Power on the server
    Start,

    /// Power off the server
    Stop,

    /// Check server status
    Status,

    /// List connected players
    Players,

    /// Follow live updates until interrupted
    Watch {
        #[arg(value_enum, default_value_t = WatchTarget::Presence)]
        target: WatchTarget,
    },
}
