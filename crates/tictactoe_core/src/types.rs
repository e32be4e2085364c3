//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use serde::Serialize;

use crate::position::Position;
use crate::rules::{Line, Win};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Mark {
    /// Mark X (goes first).
    X,
    /// Mark O (goes second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from an arbitrary snapshot of squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as an array.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Places a mark (unchecked - callers verify the square is empty).
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.squares[pos.index()] = Square::Occupied(mark);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as three rows; empty squares show their 1-based key.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// A character that is neither a mark nor an empty marker.
    #[display("Invalid board character {:?}", _0)]
    InvalidCell(char),

    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for BoardParseError {}

/// Parses `X`, `O` and `.`/`-`/`_` cells; `/`, `|` and whitespace are separators.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;
        for ch in s.chars() {
            let square = match ch {
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
            if let Some(slot) = squares.get_mut(count) {
                *slot = square;
            }
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError::WrongLength(count));
        }
        Ok(Self { squares })
    }
}

/// Current status of the game, derived from the board and the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Mark that plays next.
        next: Mark,
    },
    /// A line was completed.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl GameStatus {
    /// Controller phase for this status.
    pub fn phase(&self) -> Phase {
        match self {
            GameStatus::InProgress { .. } => Phase::InProgress,
            GameStatus::Won { .. } => Phase::Won,
            GameStatus::Draw => Phase::Draw,
        }
    }

    /// The win, if the game is won.
    pub fn win(&self) -> Option<Win> {
        match *self {
            GameStatus::Won { mark, line } => Some(Win { mark, line }),
            _ => None,
        }
    }

    /// Short status line: `Winner: X`, `Draw` or `Turn: O`.
    pub fn headline(&self) -> String {
        match self {
            GameStatus::InProgress { next } => format!("Turn: {}", next),
            GameStatus::Won { mark, .. } => format!("Winner: {}", mark),
            GameStatus::Draw => "Draw".to_string(),
        }
    }

    /// Second status line telling the players what to do.
    pub fn detail(&self) -> &'static str {
        match self {
            GameStatus::InProgress { .. } => "Place your mark on the board.",
            GameStatus::Won { .. } => "Game over — press Reset to play again.",
            GameStatus::Draw => "No more moves — press Reset to try again.",
        }
    }
}

/// Controller state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// Terminal: a mark completed a line.
    Won,
    /// Terminal: the board filled up.
    Draw,
}
