//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is a draw: full and no triad held.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    const A: Cell = Cell::Occupied(Player::Minimizer);
    const B: Cell = Cell::Occupied(Player::Maximizer);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_rows([[A, B, E], [E, E, E], [E, E, E]]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // A B A / B A A / B A B
        let board = Board::from_rows([[A, B, A], [B, A, A], [B, A, B]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_rows([[A, A, A], [B, B, A], [B, A, B]]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
