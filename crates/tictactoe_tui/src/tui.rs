//! Terminal setup and the event loop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::sleep;
use tracing::{error, info, instrument};

use crate::app::App;
use crate::config::AppConfig;
use crate::input::map_event;
use crate::ui;

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when the loop fails.
#[instrument(skip_all, fields(theme = %config.theme()))]
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(*config.theme());
    let res = run_app(&mut terminal, &mut app, config.tick_rate()).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal restored");

    res
}

/// Draw, poll one event, apply it; repeat.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(tick_rate)? {
            let event = event::read()?;
            if let Some(command) = map_event(&event, app.hit_map()) {
                app.handle(command);
            }
        }

        sleep(Duration::from_millis(10)).await;
    }
    Ok(())
}
