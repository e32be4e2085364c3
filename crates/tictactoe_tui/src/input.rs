//! Translation of terminal events into game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_core::Position;
use tracing::instrument;

use crate::ui::{HitMap, HitTarget};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark at a cell.
    Place(Position),
    /// Place the current mark under the cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Start a new game.
    Reset,
    /// Switch between light and dark.
    ToggleTheme,
    /// Leave the application.
    Quit,
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Maps any terminal event; mouse clicks are resolved against `hits`.
pub fn map_event(event: &Event, hits: &HitMap) -> Option<Command> {
    match event {
        Event::Key(key) => map_key(*key),
        Event::Mouse(mouse) => map_mouse(*mouse, hits),
        _ => None,
    }
}

/// Maps a key press. Release and repeat events are ignored.
#[instrument]
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reset),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::ToggleTheme),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            // Keys 1-9 name cells 0-8; '0' maps to nothing.
            Position::from_index(digit.checked_sub(1)?).map(Command::Place)
        }
        _ => None,
    }
}

/// Maps a left click on a cell or button.
#[instrument(skip(hits))]
pub fn map_mouse(mouse: MouseEvent, hits: &HitMap) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    match hits.target(mouse.column, mouse.row)? {
        HitTarget::Cell(position) => Some(Command::Place(position)),
        HitTarget::Reset => Some(Command::Reset),
        HitTarget::ThemeToggle => Some(Command::ToggleTheme),
    }
}

/// Moves cursor one step, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let next = match direction {
        Direction::Up => row.checked_sub(1).and_then(|r| Position::at(r, col)),
        Direction::Down => Position::at(row + 1, col),
        Direction::Left => col.checked_sub(1).and_then(|c| Position::at(row, c)),
        Direction::Right => Position::at(row, col + 1),
    };
    next.unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_digit_keys_place() {
        assert_eq!(
            map_key(press(KeyCode::Char('1'))),
            Some(Command::Place(Position::TopLeft))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('9'))),
            Some(Command::Place(Position::BottomRight))
        );
        assert_eq!(map_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Command::Reset));
        assert_eq!(map_key(press(KeyCode::Char('t'))), Some(Command::ToggleTheme));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Command::PlaceAtCursor));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(map_key(press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleLeft, Direction::Down), Position::BottomLeft);
    }

    #[test]
    fn test_clicks_resolve_through_hit_map() {
        let mut hits = HitMap::default();
        hits.cells[4] = Rect::new(10, 5, 9, 3);
        hits.reset = Rect::new(0, 20, 10, 3);
        hits.theme_toggle = Rect::new(12, 20, 14, 3);

        assert_eq!(map_mouse(click(14, 6), &hits), Some(Command::Place(Position::Center)));
        assert_eq!(map_mouse(click(2, 21), &hits), Some(Command::Reset));
        assert_eq!(map_mouse(click(12, 22), &hits), Some(Command::ToggleTheme));
        assert_eq!(map_mouse(click(19, 6), &hits), None);

        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click(14, 6)
        };
        assert_eq!(map_mouse(right_click, &hits), None);
    }
}
