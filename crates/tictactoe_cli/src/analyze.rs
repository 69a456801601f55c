//! One-shot position analysis for the `best-move` command.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tictactoe_engine::{Board, Player, SearchResult, minimax};
use tracing::{info, instrument};

/// Side to move, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Minimizer (player A).
    Min,
    /// Maximizer (player B).
    Max,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Min => Player::Minimizer,
            Side::Max => Player::Maximizer,
        }
    }
}

/// Searches `board_text` and writes the result to `out`.
#[instrument(skip(out))]
pub fn best_move<W: Write>(
    board_text: &str,
    side: Side,
    depth: Option<usize>,
    json: bool,
    out: &mut W,
) -> Result<SearchResult> {
    let mut board: Board = board_text
        .parse()
        .with_context(|| format!("Invalid board {:?}", board_text))?;
    let depth = depth.unwrap_or_else(|| board.empty_count());

    let result = minimax(&mut board, depth, side.into());
    info!(?result, depth, "Analysis complete");

    if json {
        serde_json::to_writer(&mut *out, &result).context("Failed to encode result")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", describe(&result))?;
    }
    Ok(result)
}

/// Human-readable summary of a search result.
pub fn describe(result: &SearchResult) -> String {
    match result.best_move() {
        Some(mv) => {
            let cell = mv
                .cell_number()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "?".to_string());
            format!(
                "move: row {}, col {} (cell {}), score {}",
                mv.row,
                mv.col,
                cell,
                result.score()
            )
        }
        None => format!("no move, score {}", result.score()),
    }
}
