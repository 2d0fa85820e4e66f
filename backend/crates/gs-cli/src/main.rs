//! gs - game server lifecycle CLI
//!
//! # Examples
//!
//! ```bash
//! gs start
//! gs status
//! gs players --server http://10.0.0.5:3000
//! gs watch presence
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use gs_cli::{CliClientResult, Client, server_url_for};
use gs_core::{CommandResult, RosterResult, Status};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Explicit flag > gs config
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = Client::new(&server_url);

    let result: CliClientResult<bool> = match cli.command {
        Commands::Start => client.start().await.map(|result| {
            report_command(
                result,
                "Server started",
                "Server already started",
            )
        }),
        Commands::Stop => client.stop().await.map(|result| {
            report_command(
                result,
                "Server stopped",
                "Server already down",
            )
        }),
        Commands::Status => client.status().await.map(report_status),
        Commands::Players => client.players().await.map(report_players),
        Commands::Watch { target } => client
            .watch(target, |payload| println!("{}", payload))
            .await
            .map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn report_command(result: CommandResult, success: &str, ignored: &str) -> bool {
    match result {
        CommandResult::Success => {
            println!("{}", success);
            true
        }
        CommandResult::Ignored => {
            println!("{}", ignored);
            true
        }
        CommandResult::Error { detail } => {
            eprintln!("Backend error: {}", detail);
            false
        }
    }
}

fn report_status(status: Status) -> bool {
    let message = match status {
        Status::Starting => "Server is STARTING",
        Status::Healthy => "Server is UP",
        Status::Inactive => "Server is OFFLINE",
        Status::Failed => "Server FAILED (check logs)",
    };
    println!("{} ({})", message, status);
    true
}

fn report_players(result: RosterResult) -> bool {
    match result {
        RosterResult::Players(players) if players.is_empty() => {
            println!("No players online");
            true
        }
        RosterResult::Players(players) => {
            println!("Players online: {}", players.len());
            for player in players {
                println!("- {}", player);
            }
            true
        }
        RosterResult::Ignored => {
            println!("Server isn't online");
            true
        }
        RosterResult::Error { detail } => {
            eprintln!("Backend error: {}", detail);
            false
        }
    }
}

/// Derive the server URL from the same config the server reads.
fn discover_server_url() -> String {
    match gs_config::Config::load() {
        Ok(config) => server_url_for(&config.server),
        Err(e) => {
            eprintln!("Error loading gs config: {}", e);
            eprintln!();
            eprintln!("Specify a server URL explicitly:");
            eprintln!("  gs --server http://127.0.0.1:3000 <command>");
            std::process::exit(1);
        }
    }
}
