//! Game rules for tic-tac-toe.
//!
//! Pure functions over a borrowed [`Board`]. None of them keep state, so any
//! number of boards can be evaluated side by side.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{TRIADS, is_win, winner};

use crate::{Board, Cell, Move, Outcome, Player, Score};
use tracing::{instrument, trace};

/// Every empty cell, in row-major order.
///
/// The order is part of the contract: search tie-breaks depend on it.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    board
        .cells()
        .iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell == Cell::Empty)
                .map(move |(col, _)| Move::new(row, col))
        })
        .collect()
}

/// A move is valid when it is on the board and targets an empty cell.
pub fn is_valid_move(board: &Board, mv: Move) -> bool {
    matches!(board.get(mv.row, mv.col), Some(Cell::Empty))
}

/// Places `player` at `mv` if the move is valid.
///
/// Returns `false` and leaves the board untouched otherwise.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, player: Player, mv: Move) -> bool {
    if !is_valid_move(board, mv) {
        trace!("Rejected move");
        return false;
    }
    board.put(mv.row, mv.col, Cell::Occupied(player));
    true
}

/// A board is terminal once someone has won or no cell is left.
pub fn is_terminal(board: &Board) -> bool {
    is_win(board, Player::Maximizer) || is_win(board, Player::Minimizer) || board.is_full()
}

/// Static evaluation: +1 maximizer won, -1 minimizer won, 0 otherwise.
///
/// Non-terminal boards also score 0, so only call this at terminal or
/// depth-exhausted nodes.
pub fn evaluate(board: &Board) -> Score {
    if is_win(board, Player::Maximizer) {
        Player::Maximizer.winning_score()
    } else if is_win(board, Player::Minimizer) {
        Player::Minimizer.winning_score()
    } else {
        0
    }
}

/// Classifies a finished game, `None` while play continues.
#[instrument]
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(Player::Maximizer) => Some(Outcome::MaximizerWin),
        Some(Player::Minimizer) => Some(Outcome::MinimizerWin),
        None if board.is_full() => Some(Outcome::Draw),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Cell = Cell::Occupied(Player::Minimizer);
    const B: Cell = Cell::Occupied(Player::Maximizer);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::from_rows([[A, E, B], [E, E, E], [E, A, E]]);
        let moves = legal_moves(&board);
        assert_eq!(
            moves,
            vec![
                Move::new(0, 1),
                Move::new(1, 0),
                Move::new(1, 1),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 2),
            ]
        );
        assert_eq!(moves, legal_moves(&board));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let mut board = Board::new();
        assert!(apply_move(&mut board, Player::Minimizer, Move::new(1, 1)));
        let before = board.clone();
        assert!(!apply_move(&mut board, Player::Maximizer, Move::new(1, 1)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut board = Board::new();
        assert!(!apply_move(&mut board, Player::Minimizer, Move::new(3, 0)));
        assert!(!apply_move(&mut board, Player::Minimizer, Move::new(0, 3)));
        assert!(!apply_move(&mut board, Player::Minimizer, Move::new(usize::MAX, 1)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board_without_triad_is_draw() {
        let board = Board::from_rows([[A, B, A], [B, A, A], [B, A, B]]);
        assert!(is_terminal(&board));
        assert_eq!(evaluate(&board), 0);
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_evaluate_signs() {
        let max_won = Board::from_rows([[B, B, B], [A, A, E], [E, E, E]]);
        let min_won = Board::from_rows([[B, B, E], [A, A, A], [B, E, E]]);
        assert_eq!(evaluate(&max_won), 1);
        assert_eq!(evaluate(&min_won), -1);
        assert_eq!(outcome(&max_won), Some(Outcome::MaximizerWin));
        assert_eq!(outcome(&min_won), Some(Outcome::MinimizerWin));
    }

    #[test]
    fn test_open_board_not_terminal() {
        let board = Board::from_rows([[B, B, E], [A, A, E], [E, E, E]]);
        assert!(!is_terminal(&board));
        assert_eq!(evaluate(&board), 0);
        assert_eq!(outcome(&board), None);
    }
}
