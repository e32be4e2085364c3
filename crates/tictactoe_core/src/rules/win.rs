//! Win detection logic for tic-tac-toe.

use serde::Serialize;
use tracing::instrument;

use super::lines::{LINES, Line};
use crate::types::{Board, Mark, Square};

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Win {
    /// The winning mark.
    pub mark: Mark,
    /// The completed line.
    pub line: Line,
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first complete one is
/// returned, so a board with several complete lines reports the row
/// before the column before the diagonal.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Win> {
    for line in LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if let Square::Occupied(mark) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(Win { mark, line });
        }
    }

    None
}
