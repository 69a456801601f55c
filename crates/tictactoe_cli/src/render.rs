//! Text rendering of the board.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Board, Cell, Player};

/// Icon a side is drawn with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Icon {
    /// The icon the other side gets.
    pub fn other(self) -> Self {
        match self {
            Icon::X => Icon::O,
            Icon::O => Icon::X,
        }
    }

    /// Display character.
    pub fn glyph(self) -> char {
        match self {
            Icon::X => 'X',
            Icon::O => 'O',
        }
    }
}

/// Characters used to draw each cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct Glyphs {
    /// Glyph for the minimizer (the human).
    minimizer: char,
    /// Glyph for the maximizer (the computer).
    maximizer: char,
    /// Glyph for an empty cell.
    empty: char,
}

impl Glyphs {
    /// Glyphs for a game where the human plays `human`.
    pub fn for_human(human: Icon, empty: char) -> Self {
        Self::new(human.glyph(), human.other().glyph(), empty)
    }

    fn cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Empty => self.empty,
            Cell::Occupied(Player::Minimizer) => self.minimizer,
            Cell::Occupied(Player::Maximizer) => self.maximizer,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::for_human(Icon::X, '.')
    }
}

/// Draws the board as a boxed 3x3 grid.
pub fn render_board(board: &Board, glyphs: &Glyphs) -> String {
    const RULE: &str = "+---+---+---+\n";

    let mut out = String::from(RULE);
    for row in board.cells() {
        for cell in row {
            out.push_str("| ");
            out.push(glyphs.cell(*cell));
            out.push(' ');
        }
        out.push_str("|\n");
        out.push_str(RULE);
    }
    out
}
