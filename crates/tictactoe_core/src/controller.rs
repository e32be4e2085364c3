//! Session controller - the single owner of mutable game state.

use tracing::{debug, info, instrument};

use crate::position::Position;
use crate::rules::derive_status;
use crate::theme::Theme;
use crate::types::{Board, GameStatus, Mark, Phase};
use crate::view::GameView;

/// Why a move was not applied.
///
/// Rejections are an expected outcome of stale or invalid input. The
/// controller state is untouched whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The index does not name a cell (must be 0-8).
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejected {}

/// Owns the board, the turn and the theme for one session.
///
/// Status is never stored: every query derives it from the board and
/// the turn, so the board and the status cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    board: Board,
    turn: Mark,
    theme: Theme,
}

impl GameController {
    /// Creates a controller with an empty board and the default theme.
    #[instrument]
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Creates a controller with an empty board and the given theme.
    #[instrument]
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            theme,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Derives the current game status.
    pub fn status(&self) -> GameStatus {
        derive_status(&self.board, self.turn)
    }

    /// Current state machine phase.
    pub fn phase(&self) -> Phase {
        self.status().phase()
    }

    /// Whether a move at `position` would currently be accepted.
    pub fn is_interactive(&self, position: Position) -> bool {
        self.phase() == Phase::InProgress && self.board.is_empty(position)
    }

    /// Places the current mark at a raw board index (0-8).
    ///
    /// Out-of-range indices are rejected like any other invalid move.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveRejected> {
        let Some(position) = Position::from_index(index) else {
            debug!(index, "Rejecting out-of-bounds move");
            return Err(MoveRejected::OutOfBounds(index));
        };
        self.apply_move_at(position)
    }

    /// Places the current mark at `position` and passes the turn.
    ///
    /// Returns the status after the move. Nothing changes when the game
    /// is over or the square is taken.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move_at(&mut self, position: Position) -> Result<GameStatus, MoveRejected> {
        if self.phase() != Phase::InProgress {
            debug!(%position, "Rejecting move after game over");
            return Err(MoveRejected::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Rejecting move to occupied square");
            return Err(MoveRejected::SquareOccupied(position));
        }

        let mark = self.turn;
        self.board.place(position, mark);
        self.turn = mark.opponent();

        let status = self.status();
        match status {
            GameStatus::Won { mark, line } => {
                info!(%mark, line = ?line.indices(), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress { next } => debug!(%mark, %position, %next, "Move applied"),
        }
        Ok(status)
    }

    /// Returns to an empty board with X to move. The theme is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(phase = %self.phase(), "Resetting game");
        self.board = Board::new();
        self.turn = Mark::X;
    }

    /// Flips between light and dark, returning the new theme.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        info!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> GameView {
        GameView::new(&self.board, self.status(), self.theme)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = GameController::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.theme(), Theme::Light);
        assert_eq!(game.phase(), Phase::InProgress);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = GameController::new();
        assert_eq!(game.apply_move(9), Err(MoveRejected::OutOfBounds(9)));
        assert_eq!(game, GameController::new());
    }

    #[test]
    fn test_turn_flips_on_winning_move() {
        let mut game = GameController::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).unwrap();
        }
        assert_eq!(game.phase(), Phase::Won);
        assert_eq!(game.turn(), Mark::O);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            MoveRejected::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(MoveRejected::GameOver.to_string(), "Game is already over");
    }
}
