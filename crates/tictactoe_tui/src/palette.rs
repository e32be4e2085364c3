//! Terminal colors for the light and dark themes.

use ratatui::style::{Color, Modifier, Style};
use tictactoe_core::{Mark, Theme, ThemeSink};
use tracing::{debug, instrument};

/// Colors the UI draws with.
///
/// The palette is the terminal's display environment: it only changes
/// through [`ThemeSink::apply_theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalPalette {
    /// Theme these colors belong to.
    pub theme: Theme,
    /// Page background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Borders, hints and disabled cells.
    pub muted: Color,
    /// Title and status headline.
    pub accent: Color,
    /// X marks.
    pub mark_x: Color,
    /// O marks.
    pub mark_o: Color,
    /// Background of winning cells.
    pub winning: Color,
    /// Background of the keyboard cursor.
    pub cursor: Color,
}

impl TerminalPalette {
    /// Palette for a light terminal page.
    pub const fn light() -> Self {
        Self {
            theme: Theme::Light,
            background: Color::Rgb(248, 250, 252),
            foreground: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(148, 163, 184),
            accent: Color::Rgb(37, 99, 235),
            mark_x: Color::Rgb(37, 99, 235),
            mark_o: Color::Rgb(220, 38, 38),
            winning: Color::Rgb(253, 230, 138),
            cursor: Color::Rgb(226, 232, 240),
        }
    }

    /// Palette for a dark terminal page.
    pub const fn dark() -> Self {
        Self {
            theme: Theme::Dark,
            background: Color::Rgb(15, 23, 42),
            foreground: Color::Rgb(226, 232, 240),
            muted: Color::Rgb(100, 116, 139),
            accent: Color::Rgb(96, 165, 250),
            mark_x: Color::Rgb(96, 165, 250),
            mark_o: Color::Rgb(248, 113, 113),
            winning: Color::Rgb(120, 53, 15),
            cursor: Color::Rgb(51, 65, 85),
        }
    }

    /// Palette for `theme`.
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Base style for the whole frame.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Style for secondary text and borders.
    pub fn dim(&self) -> Style {
        self.base().fg(self.muted)
    }

    /// Bold style for a mark.
    pub fn mark(&self, mark: Mark) -> Style {
        let color = match mark {
            Mark::X => self.mark_x,
            Mark::O => self.mark_o,
        };
        self.base().fg(color).add_modifier(Modifier::BOLD)
    }
}

impl Default for TerminalPalette {
    fn default() -> Self {
        Self::light()
    }
}

impl ThemeSink for TerminalPalette {
    #[instrument(skip(self))]
    fn apply_theme(&mut self, theme: Theme) {
        *self = Self::for_theme(theme);
        debug!(%theme, "Applied terminal palette");
    }
}
