//! Terminal front end for two-player tic-tac-toe
//!
//! Wraps a [`tictactoe_core::GameController`] in a ratatui interface.
//!
//! # Architecture
//!
//! - **App**: controller, cursor and palette; applies [`Command`]s
//! - **Input**: crossterm key and mouse events to [`Command`]s
//! - **UI**: stateless rendering of the controller's view
//! - **Palette**: terminal colors, driven through [`tictactoe_core::ThemeSink`]
//! - **Replay**: headless move application for scripts

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod palette;
mod replay;
mod tui;
mod ui;

pub use app::App;
pub use cli::{Cli, Command as CliCommand};
pub use config::{AppConfig, ConfigError};
pub use input::{Command, Direction, map_event, map_key, map_mouse, move_cursor};
pub use palette::TerminalPalette;
pub use replay::{replay, run_replay, summary};
pub use tui::run_tui;
pub use ui::{HitMap, HitTarget, draw};
