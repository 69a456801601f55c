//! Move coordinates.
//!
//! A move is just a target cell. Whether it may be played depends on the
//! board, so any coordinates can be represented and the rules reject the
//! ones that are out of range or occupied.

use super::types::SIZE;
use serde::{Deserialize, Serialize};

/// Keypad cell numbers 1-9 in row-major order.
const CELL_LOOKUP: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];

/// A `(row, col)` target on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row, valid in `0..=2`.
    pub row: usize,
    /// Column, valid in `0..=2`.
    pub col: usize,
}

impl Move {
    /// Creates a new move. Coordinates are not range-checked here.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Maps a keypad cell number (1-9) to its coordinates.
    pub fn from_cell(cell: usize) -> Option<Self> {
        let index = cell.checked_sub(1)?;
        CELL_LOOKUP
            .get(index)
            .map(|&(row, col)| Self::new(row, col))
    }

    /// Keypad cell number (1-9), or `None` when out of range.
    pub fn cell_number(self) -> Option<usize> {
        self.in_range().then(|| self.row * SIZE + self.col + 1)
    }

    /// Both coordinates lie on the board.
    pub fn in_range(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
