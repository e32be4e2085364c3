//! Tic-tac-toe core - board, rules and session controller
//!
//! Everything in this crate is pure: no terminal, no files, no clock.
//!
//! # Architecture
//!
//! - **Rules**: stateless win/draw evaluation over a [`Board`] snapshot
//! - **Controller**: [`GameController`] owns the board, the turn and the
//!   theme, and mediates every mutation
//! - **View**: [`GameView`] is the read-only snapshot a front end renders
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, GameStatus, Mark};
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert!(matches!(game.status(), GameStatus::Won { mark: Mark::X, .. }));
//! assert_eq!(game.view().headline(), "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod position;
pub mod rules;
mod theme;
mod types;
mod view;

pub use controller::{GameController, MoveRejected};
pub use position::Position;
pub use rules::{LINES, Line, Win, derive_status, evaluate_winner, is_full};
pub use theme::{Theme, ThemeSink};
pub use types::{Board, BoardParseError, GameStatus, Mark, Phase, Square};
pub use view::{CellView, GameView, INSTRUCTIONS, TITLE};
