//! Rendering tests against an in-memory terminal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_core::{Mark, Phase, Position, Square, Theme};
use tictactoe_tui::{App, Command, TerminalPalette, draw, map_event};

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn center(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn click(rect: Rect) -> Event {
    let (column, row) = center(rect);
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_initial_screen() {
    let mut app = App::new(Theme::Light);
    let screen = render(&mut app);

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Turn: X"));
    assert!(screen.contains("Place your mark on the board."));
    assert!(screen.contains("Two players, same device. X goes first."));
    assert!(screen.contains("Reset"));
    assert!(screen.contains("Dark mode"));
}

#[test]
fn test_draw_records_hit_map() {
    let mut app = App::new(Theme::Light);
    render(&mut app);

    let hits = *app.hit_map();
    for (index, rect) in hits.cells.iter().enumerate() {
        assert!(rect.width > 0 && rect.height > 0, "cell {} has no area", index);
    }
    assert!(hits.reset.width > 0);
    assert!(hits.theme_toggle.width > 0);
    assert!(hits.cells[0].x < hits.cells[1].x);
    assert!(hits.cells[0].y < hits.cells[3].y);
}

#[test]
fn test_click_cell_places_mark() {
    let mut app = App::new(Theme::Light);
    render(&mut app);

    let event = click(app.hit_map().cells[Position::BottomLeft.index()]);
    let command = map_event(&event, app.hit_map()).unwrap();
    assert_eq!(command, Command::Place(Position::BottomLeft));
    app.handle(command);

    assert_eq!(
        app.controller().board().get(Position::BottomLeft),
        Square::Occupied(Mark::X)
    );
    assert!(render(&mut app).contains("Turn: O"));
}

#[test]
fn test_click_buttons() {
    let mut app = App::new(Theme::Light);
    app.handle(Command::Place(Position::Center));
    render(&mut app);

    let toggle = click(app.hit_map().theme_toggle);
    let command = map_event(&toggle, app.hit_map()).unwrap();
    app.handle(command);
    assert_eq!(app.palette(), &TerminalPalette::dark());
    assert!(render(&mut app).contains("Light mode"));

    let reset = click(app.hit_map().reset);
    let command = map_event(&reset, app.hit_map()).unwrap();
    app.handle(command);
    assert_eq!(app.controller().board().occupied(), 0);
}

#[test]
fn test_keyboard_game_to_win() {
    let mut app = App::new(Theme::Dark);
    for key in ['1', '4', '2', '5', '3'] {
        let event = Event::Key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        let command = map_event(&event, app.hit_map()).unwrap();
        app.handle(command);
    }

    assert_eq!(app.controller().phase(), Phase::Won);
    let screen = render(&mut app);
    assert!(screen.contains("Winner: X"));
    assert!(screen.contains("Game over — press Reset to play again."));

    // Further moves do nothing.
    app.handle(Command::Place(Position::BottomRight));
    assert!(app.controller().board().is_empty(Position::BottomRight));
}
