//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictactoe_core::Theme;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Initial theme (light or dark)
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Log file for the terminal UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (default: play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the result
    Replay {
        /// Board indices (0-8) in play order, X first
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Print the full game view as JSON
        #[arg(long)]
        json: bool,
    },
}
