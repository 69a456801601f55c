//! Tic-tac-toe engine with a perfect-play computer opponent.
//!
//! # Architecture
//!
//! - **Types**: board, cells, players and outcomes
//! - **Rules**: legality, win and draw detection, static evaluation
//! - **Search**: exhaustive minimax with first-found tie-breaking
//! - **Controller**: turn alternation between a human and the search
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Player, minimax};
//!
//! let mut board = Board::new();
//! let result = minimax(&mut board, 9, Player::Maximizer);
//! assert_eq!(result.score(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
pub mod rules;
mod search;
mod types;

pub use action::Move;
pub use controller::{AiTurn, COMPUTER, Controller, FirstMover, HUMAN, Phase, TurnError};
pub use rules::{apply_move, evaluate, is_terminal, is_valid_move, is_win, legal_moves, outcome};
pub use search::{SearchOptions, SearchResult, choose_move, minimax};
pub use types::{Board, BoardParseError, CELLS, Cell, Outcome, Player, SIZE, Score};
