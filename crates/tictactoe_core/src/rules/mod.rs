//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so any snapshot can be evaluated, not only boards reached
//! through legal play.

mod draw;
mod lines;
mod win;

pub use draw::is_full;
pub use lines::{LINES, Line};
pub use win::{Win, evaluate_winner};

use crate::types::{Board, GameStatus, Mark};
use tracing::instrument;

/// Derives the game status from a board and the mark to move.
///
/// A win takes precedence over a draw, which takes precedence over
/// an ongoing game.
#[instrument(skip(board))]
pub fn derive_status(board: &Board, next: Mark) -> GameStatus {
    if let Some(Win { mark, line }) = evaluate_winner(board) {
        GameStatus::Won { mark, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress { next }
    }
}
