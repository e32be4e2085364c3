//! Headless replay of a move list.

use std::io::Write;

use anyhow::Result;
use tictactoe_core::{GameController, Theme};
use tracing::{info, instrument, warn};

/// Applies `moves` in order; rejected moves are logged and skipped.
#[instrument]
pub fn replay(moves: &[usize], theme: Theme) -> GameController {
    let mut game = GameController::with_theme(theme);
    for &index in moves {
        if let Err(rejected) = game.apply_move(index) {
            warn!(index, %rejected, "Skipping rejected move");
        }
    }
    info!(phase = %game.phase(), "Replay finished");
    game
}

/// Board followed by the two status lines.
pub fn summary(game: &GameController) -> String {
    let view = game.view();
    format!("{}\n\n{}\n{}", game.board(), view.headline(), view.detail())
}

/// Replays `moves` and writes the summary, or the view as JSON, to `out`.
#[instrument(skip(out))]
pub fn run_replay(moves: &[usize], theme: Theme, json: bool, out: &mut impl Write) -> Result<()> {
    let game = replay(moves, theme);
    if json {
        serde_json::to_writer_pretty(&mut *out, &game.view())?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", summary(&game))?;
    }
    Ok(())
}
