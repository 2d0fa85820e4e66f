use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "gs")]
#[command(about = "Game server lifecycle CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (derived from the gs config when omitted)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,
}
