//! Tests for the minimax search.

use tictactoe_engine::{Board, Cell, Move, Player, apply_move, legal_moves, minimax};

const A: Cell = Cell::Occupied(Player::Minimizer);
const B: Cell = Cell::Occupied(Player::Maximizer);
const E: Cell = Cell::Empty;

#[test]
fn test_empty_board_is_a_draw_for_maximizer() {
    let mut board = Board::new();
    let result = minimax(&mut board, 9, Player::Maximizer);
    assert_eq!(result.score(), 0);
    assert_eq!(result.best_move(), Some(Move::new(0, 0)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_board_is_a_draw_for_minimizer() {
    let mut board = Board::new();
    let result = minimax(&mut board, 9, Player::Minimizer);
    assert_eq!(result.score(), 0);
    assert!(result.best_move().is_some());
}

#[test]
fn test_minimizer_forces_win() {
    let mut board = Board::from_rows([[B, B, E], [A, A, E], [E, E, E]]);
    let before = board.clone();

    let result = minimax(&mut board, 7, Player::Minimizer);

    assert_eq!(result.score(), -1);
    // Blocking at (0, 2) also forks the (1, 2) row and the (2, 0) diagonal,
    // and row-major order reaches it before the immediate win.
    assert_eq!(result.best_move(), Some(Move::new(0, 2)));
    assert_eq!(board, before);
}

#[test]
fn test_minimizer_completes_row() {
    let mut board = Board::from_rows([[B, B, A], [A, A, E], [B, E, E]]);
    let result = minimax(&mut board, 3, Player::Minimizer);
    assert_eq!(result.best_move(), Some(Move::new(1, 2)));
    assert_eq!(result.score(), -1);
}

#[test]
fn test_maximizer_answers_corner_with_center() {
    let mut board = Board::from_rows([[A, E, E], [E, E, E], [E, E, E]]);
    let result = minimax(&mut board, 8, Player::Maximizer);
    assert_eq!(result.best_move(), Some(Move::new(1, 1)));
    assert_eq!(result.score(), 0);
}

#[test]
fn test_search_never_mutates_input() {
    let positions = [
        Board::new(),
        Board::from_rows([[A, E, E], [E, B, E], [E, E, E]]),
        Board::from_rows([[B, A, B], [E, A, E], [E, E, E]]),
        Board::from_rows([[A, B, A], [B, A, A], [B, A, B]]),
    ];

    for original in positions {
        for player in [Player::Minimizer, Player::Maximizer] {
            let mut board = original.clone();
            let depth = board.empty_count();
            minimax(&mut board, depth, player);
            assert_eq!(board, original);
        }
    }
}

#[test]
fn test_one_ply_sees_only_immediate_wins() {
    let mut board = Board::from_rows([[B, B, E], [A, A, E], [E, E, E]]);
    let result = minimax(&mut board, 1, Player::Maximizer);
    assert_eq!(result.best_move(), Some(Move::new(0, 2)));
    assert_eq!(result.score(), 1);

    let result = minimax(&mut board, 1, Player::Minimizer);
    assert_eq!(result.score(), -1);
    assert_eq!(result.best_move(), Some(Move::new(1, 2)));
}

#[test]
fn test_chosen_move_is_legal() {
    let mut board = Board::from_rows([[A, E, E], [E, B, E], [E, E, A]]);
    let result = minimax(&mut board, 6, Player::Maximizer);
    let mv = result.best_move().unwrap();
    assert!(legal_moves(&board).contains(&mv));
    assert!(apply_move(&mut board, Player::Maximizer, mv));
}
