//! Tic Tac Toe - terminal entry point
//!
//! Two players share one terminal. `replay` runs without a UI.

#![warn(missing_docs)]

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{AppConfig, Cli, CliCommand, run_replay, run_tui};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_overrides(cli.theme, cli.log_file);

    match cli.command.unwrap_or(CliCommand::Play) {
        CliCommand::Play => {
            init_file_logging(config.log_file())?;
            run_tui(&config).await
        }
        CliCommand::Replay { moves, json } => {
            init_stderr_logging();
            run_replay(&moves, *config.theme(), json, &mut std::io::stdout().lock())
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
