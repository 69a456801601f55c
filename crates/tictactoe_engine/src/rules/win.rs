//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight winning lines as `(row, col)` triples: rows, columns, diagonals.
pub const TRIADS: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `player` occupies any full triad.
pub fn is_win(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    let cells = board.cells();
    TRIADS
        .iter()
        .any(|triad| triad.iter().all(|&(r, c)| cells[r][c] == mark))
}

/// Returns the player holding a triad, checking the maximizer first.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().rev().find(|&player| is_win(board, player))
}
