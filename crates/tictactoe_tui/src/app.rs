//! Application state and logic.

use tictactoe_core::{GameController, Position, Theme, ThemeSink};
use tracing::{debug, info, instrument};

use crate::input::{Command, move_cursor};
use crate::palette::TerminalPalette;
use crate::ui::HitMap;

/// Main application state.
#[derive(Debug)]
pub struct App {
    controller: GameController,
    palette: TerminalPalette,
    cursor: Position,
    hit_map: HitMap,
    should_quit: bool,
}

impl App {
    /// Creates a new application and applies the initial theme.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        let controller = GameController::with_theme(theme);
        let mut palette = TerminalPalette::default();
        palette.apply_theme(controller.theme());
        info!(%theme, "Starting new session");
        Self {
            controller,
            palette,
            cursor: Position::Center,
            hit_map: HitMap::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Gets the active palette.
    pub fn palette(&self) -> &TerminalPalette {
        &self.palette
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the control areas from the last frame.
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    /// Records the control areas of a freshly drawn frame.
    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Place(position) => self.place(position),
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Command::Reset => {
                self.controller.reset();
                self.cursor = Position::Center;
            }
            Command::ToggleTheme => {
                let theme = self.controller.toggle_theme();
                self.palette.apply_theme(theme);
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn place(&mut self, position: Position) {
        self.cursor = position;
        match self.controller.apply_move_at(position) {
            Ok(status) => debug!(?status, "Move accepted"),
            Err(rejected) => debug!(%rejected, "Ignoring move"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use tictactoe_core::{Mark, Phase, Square};

    #[test]
    fn test_new_applies_initial_theme() {
        let app = App::new(Theme::Dark);
        assert_eq!(app.palette(), &TerminalPalette::dark());
        assert_eq!(app.controller().theme(), Theme::Dark);
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(Theme::Light);
        app.handle(Command::MoveCursor(Direction::Up));
        app.handle(Command::PlaceAtCursor);
        assert_eq!(
            app.controller().board().get(Position::TopCenter),
            Square::Occupied(Mark::X)
        );
        assert_eq!(app.controller().turn(), Mark::O);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut app = App::new(Theme::Light);
        app.handle(Command::Place(Position::Center));
        let before = app.controller().clone();
        app.handle(Command::Place(Position::Center));
        assert_eq!(app.controller(), &before);
    }

    #[test]
    fn test_toggle_theme_updates_palette() {
        let mut app = App::new(Theme::Light);
        app.handle(Command::ToggleTheme);
        assert_eq!(app.palette().theme, Theme::Dark);
        app.handle(Command::ToggleTheme);
        assert_eq!(app.palette(), &TerminalPalette::light());
    }

    #[test]
    fn test_reset_and_quit() {
        let mut app = App::new(Theme::Light);
        for position in [Position::TopLeft, Position::Center, Position::TopCenter] {
            app.handle(Command::Place(position));
        }
        app.handle(Command::Reset);
        assert_eq!(app.controller().board().occupied(), 0);
        assert_eq!(app.controller().phase(), Phase::InProgress);
        assert_eq!(app.cursor(), Position::Center);

        assert!(!app.should_quit());
        app.handle(Command::Quit);
        assert!(app.should_quit());
    }
}
