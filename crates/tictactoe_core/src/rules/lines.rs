//! The eight winning lines.

use serde::Serialize;

use crate::position::Position;

/// Three positions that win when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[usize; 3]")]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub const fn positions(self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(self) -> [usize; 3] {
        self.0.map(Position::index)
    }

    /// Whether the line passes through `position`.
    pub fn contains(self, position: Position) -> bool {
        self.0.contains(&position)
    }
}

impl From<Line> for [usize; 3] {
    fn from(line: Line) -> Self {
        line.indices()
    }
}

/// Winning combinations in evaluation priority order.
///
/// When a board has several complete lines the first one listed wins.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];
