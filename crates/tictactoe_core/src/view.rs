//! Read-only snapshot handed to front ends.

use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

use crate::position::Position;
use crate::theme::Theme;
use crate::types::{Board, GameStatus, Phase, Square};

/// Page title.
pub const TITLE: &str = "Tic Tac Toe";

/// One-line instructions shown under the board.
pub const INSTRUCTIONS: &str = "Two players, same device. X goes first.";

/// Everything a front end needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct CellView {
    /// Board position of the cell.
    position: Position,
    /// Contents of the cell.
    square: Square,
    /// Whether activating the cell would place a mark.
    interactive: bool,
    /// Whether the cell is part of the winning line.
    winning: bool,
    /// Accessible description, e.g. `Row 1, Column 3. Marked X.`
    label: String,
}

impl CellView {
    #[instrument(skip(board, status))]
    fn new(position: Position, board: &Board, status: &GameStatus) -> Self {
        let square = board.get(position);
        let interactive = status.phase() == Phase::InProgress && square == Square::Empty;
        let winning = status.win().is_some_and(|win| win.line.contains(position));
        Self {
            position,
            square,
            interactive,
            winning,
            label: cell_label(position, square, interactive),
        }
    }
}

fn cell_label(position: Position, square: Square, interactive: bool) -> String {
    let base = format!("Row {}, Column {}", position.row() + 1, position.col() + 1);
    match square {
        Square::Occupied(mark) => format!("{}. Marked {}.", base, mark),
        Square::Empty if interactive => format!("{}. Empty. Click to place your mark.", base),
        Square::Empty => format!("{}. Disabled.", base),
    }
}

/// Snapshot of board, status and theme, derived fresh on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// The nine cells in index order.
    cells: [CellView; 9],
    /// Derived game status.
    status: GameStatus,
    /// Main status text.
    headline: String,
    /// Secondary status text.
    detail: String,
    /// Active theme.
    theme: Theme,
    /// Caption of the theme toggle control.
    toggle_caption: String,
    /// Description of the theme toggle control.
    toggle_description: String,
}

impl GameView {
    /// Builds the snapshot for a board in the given status and theme.
    #[instrument(skip(board))]
    pub fn new(board: &Board, status: GameStatus, theme: Theme) -> Self {
        Self {
            cells: Position::ALL.map(|position| CellView::new(position, board, &status)),
            status,
            headline: status.headline(),
            detail: status.detail().to_string(),
            theme,
            toggle_caption: theme.toggle_caption().to_string(),
            toggle_description: theme.toggle_description(),
        }
    }

    /// The cell at `position`.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.index()]
    }
}
