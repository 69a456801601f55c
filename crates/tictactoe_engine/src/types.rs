//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::EnumIter;
use tracing::instrument;

/// Board side length.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// Player in the minimax convention.
///
/// The minimizer is player A, the maximizer is player B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Player {
    /// Player A, seeks the lowest score.
    Minimizer,
    /// Player B, seeks the highest score.
    Maximizer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Minimizer => Player::Maximizer,
            Player::Maximizer => Player::Minimizer,
        }
    }

    /// Score that marks a win for this player.
    pub fn winning_score(self) -> Score {
        match self {
            Player::Minimizer => -1,
            Player::Maximizer => 1,
        }
    }

    fn notation(self) -> char {
        match self {
            Player::Minimizer => 'A',
            Player::Maximizer => 'B',
        }
    }
}

/// Static evaluation of a position: -1 minimizer win, 0 draw, +1 maximizer win.
pub type Score = i32;

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    fn notation(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.notation(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed `[row][col]`. Only cells that have been played are
/// non-empty; the board itself does not enforce turn order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of cells.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns all cells as rows.
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Empty)
            .count()
    }

    /// Number of occupied cells.
    pub fn moves_played(&self) -> usize {
        CELLS - self.empty_count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Writes a cell without any legality check. In-range coordinates only.
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }
}

/// Compact row-major notation: `A` minimizer, `B` maximizer, `.` empty,
/// rows separated by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.notation())?;
            }
        }
        Ok(())
    }
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character other than `A`, `B`, `.`, `/` or whitespace.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// The notation did not describe exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars() {
            let cell = match ch.to_ascii_uppercase() {
                'A' => Cell::Occupied(Player::Minimizer),
                'B' => Cell::Occupied(Player::Maximizer),
                '.' | '_' | '-' => Cell::Empty,
                '/' => continue,
                c if c.is_whitespace() => continue,
                _ => return Err(BoardParseError::UnexpectedChar(ch)),
            };
            cells.push(cell);
        }

        if cells.len() != CELLS {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.put(i / SIZE, i % SIZE, cell);
        }
        Ok(board)
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The maximizer completed a triad.
    MaximizerWin,
    /// The minimizer completed a triad.
    MinimizerWin,
    /// Board full with no triad.
    Draw,
}

impl Outcome {
    /// Winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::MaximizerWin => Some(Player::Maximizer),
            Outcome::MinimizerWin => Some(Player::Minimizer),
            Outcome::Draw => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.moves_played(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(0, 0), Some(Cell::Empty));
        assert_eq!(board.get(3, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_parse_notation() {
        let board: Board = "BB./AA./...".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Player::Maximizer)));
        assert_eq!(board.get(1, 1), Some(Cell::Occupied(Player::Minimizer)));
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
        assert_eq!(board.to_string(), "BB./AA./...");
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let board: Board = "a b .\n. . .\n. . .".parse().unwrap();
        assert_eq!(board.get(0, 1), Some(Cell::Occupied(Player::Maximizer)));
        assert_eq!(board.moves_played(), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "AAX......".parse::<Board>(),
            Err(BoardParseError::UnexpectedChar('X'))
        );
        assert_eq!(
            "AA".parse::<Board>(),
            Err(BoardParseError::WrongCellCount(2))
        );
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Minimizer.opponent(), Player::Maximizer);
        assert_eq!(Player::Maximizer.opponent(), Player::Minimizer);
    }
}
