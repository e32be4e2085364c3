//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{CellView, GameView, INSTRUCTIONS, Position, Square, TITLE};
use tracing::instrument;

use crate::app::App;
use crate::palette::TerminalPalette;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const HELP: &str = "1-9 place · arrows move · Enter place · r reset · t theme · q quit";

/// Screen areas of the clickable controls from the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    /// Cell areas in board index order.
    pub cells: [Rect; 9],
    /// The reset button.
    pub reset: Rect,
    /// The theme toggle button.
    pub theme_toggle: Rect,
}

/// Something a click can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A board cell.
    Cell(Position),
    /// The reset button.
    Reset,
    /// The theme toggle button.
    ThemeToggle,
}

impl HitMap {
    /// Finds the control under terminal coordinate (`column`, `row`).
    pub fn target(&self, column: u16, row: u16) -> Option<HitTarget> {
        let hit = |rect: &Rect| {
            column >= rect.x
                && column < rect.x.saturating_add(rect.width)
                && row >= rect.y
                && row < rect.y.saturating_add(rect.height)
        };

        if let Some(index) = self.cells.iter().position(hit) {
            return Position::from_index(index).map(HitTarget::Cell);
        }
        if hit(&self.reset) {
            return Some(HitTarget::Reset);
        }
        if hit(&self.theme_toggle) {
            return Some(HitTarget::ThemeToggle);
        }
        None
    }
}

/// Renders the whole game screen and records where the controls landed.
#[instrument(skip_all)]
pub fn draw(frame: &mut Frame, app: &mut App) {
    let view = app.controller().view();
    let palette = *app.palette();
    let cursor = app.cursor();
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(4), // Status
            Constraint::Min(CELL_HEIGHT * 3), // Board
            Constraint::Length(1), // Instructions
            Constraint::Length(3), // Buttons
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.dim()),
        );
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], &view, &palette);

    let mut hits = HitMap {
        cells: draw_board(frame, chunks[2], &view, cursor, &palette),
        ..HitMap::default()
    };

    let instructions = Paragraph::new(INSTRUCTIONS)
        .style(palette.dim())
        .alignment(Alignment::Center);
    frame.render_widget(instructions, chunks[3]);

    let (reset, theme_toggle) = draw_buttons(frame, chunks[4], &view, &palette);
    hits.reset = reset;
    hits.theme_toggle = theme_toggle;

    let help = Paragraph::new(HELP)
        .style(palette.dim())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);

    app.set_hit_map(hits);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, palette: &TerminalPalette) {
    let lines = vec![
        Line::styled(
            view.headline().clone(),
            palette
                .base()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(view.detail().clone(), palette.dim()),
    ];
    let status = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.dim())
            .title("Status"),
    );
    frame.render_widget(status, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Position,
    palette: &TerminalPalette,
) -> [Rect; 9] {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(position) = Position::at(row, col) {
                cells[position.index()] = *cell_area;
                draw_cell(frame, *cell_area, view.cell(position), position == cursor, palette);
            }
        }
    }
    cells
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: &CellView,
    is_cursor: bool,
    palette: &TerminalPalette,
) {
    let background = if *cell.winning() {
        palette.winning
    } else if is_cursor {
        palette.cursor
    } else {
        palette.background
    };

    let (symbol, style) = match cell.square() {
        Square::Occupied(mark) => (mark.to_string(), palette.mark(*mark)),
        Square::Empty if *cell.interactive() => {
            ((cell.position().index() + 1).to_string(), palette.dim())
        }
        Square::Empty => ("·".to_string(), palette.dim()),
    };

    let border_style = if *cell.winning() {
        palette
            .base()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.dim()
    };

    let paragraph = Paragraph::new(symbol)
        .style(style.bg(background))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style.bg(background)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_buttons(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    palette: &TerminalPalette,
) -> (Rect, Rect) {
    let reset_label = "Reset";
    let toggle_label = view.toggle_caption().as_str();
    let width = |label: &str| label.chars().count() as u16 + 4;

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(width(reset_label)),
            Constraint::Length(2),
            Constraint::Length(width(toggle_label)),
        ])
        .flex(Flex::Center)
        .split(area);

    for (label, rect) in [(reset_label, buttons[0]), (toggle_label, buttons[2])] {
        let button = Paragraph::new(label)
            .style(palette.base().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.base().fg(palette.accent)),
            );
        frame.render_widget(button, rect);
    }

    (buttons[0], buttons[2])
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hit_map_hits_nothing() {
        assert_eq!(HitMap::default().target(0, 0), None);
    }

    #[test]
    fn test_cells_take_priority_in_index_order() {
        let mut hits = HitMap::default();
        hits.cells[2] = Rect::new(0, 0, 5, 5);
        hits.reset = Rect::new(0, 0, 5, 5);
        assert_eq!(hits.target(1, 1), Some(HitTarget::Cell(Position::TopRight)));
        assert_eq!(hits.target(5, 1), None);
    }
}
