//! Exhaustive minimax search.
//!
//! The search walks the game tree on a single board buffer. Each tentative
//! placement is held by a [`Probe`] guard that clears the cell again when it
//! goes out of scope, so the caller's board is identical after every return
//! path, unwinding included.

use crate::rules::{evaluate, is_terminal, legal_moves};
use crate::{Board, Cell, Move, Player, Score};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Best move found by the search and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    best_move: Option<Move>,
    score: Score,
    nodes: u64,
}

impl SearchResult {
    /// Best move, `None` at a terminal or depth-exhausted node.
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    /// Minimax value of the position.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Positions visited to produce this result.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Tuning knobs for [`choose_move`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// On an empty board, answer with the top-left corner instead of searching.
    pub corner_opening: bool,
}

/// A tentative placement that is undone on drop.
struct Probe<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, player: Player, mv: Move) -> Self {
        board.put(mv.row, mv.col, Cell::Occupied(player));
        Self { board, mv }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.put(self.mv.row, self.mv.col, Cell::Empty);
    }
}

/// Minimax value of `board` with `player` to move, searching `depth` plies.
///
/// Moves are tried in row-major order and the best is only replaced on a
/// strict improvement, so the first optimal move wins ties. The board is
/// mutated during the search and restored before returning.
pub fn minimax(board: &mut Board, depth: usize, player: Player) -> SearchResult {
    let mut nodes = 0;
    let (best_move, score) = search(board, depth, player, &mut nodes);
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

fn search(
    board: &mut Board,
    depth: usize,
    player: Player,
    nodes: &mut u64,
) -> (Option<Move>, Score) {
    *nodes += 1;

    if depth == 0 || is_terminal(board) {
        return (None, evaluate(board));
    }

    let mut best_move = None;
    let mut best_score = match player {
        Player::Maximizer => Score::MIN,
        Player::Minimizer => Score::MAX,
    };

    for mv in legal_moves(board) {
        let score = {
            let mut probe = Probe::place(board, player, mv);
            search(&mut probe, depth - 1, player.opponent(), nodes).1
        };

        let improves = match player {
            Player::Maximizer => score > best_score,
            Player::Minimizer => score < best_score,
        };
        if improves {
            best_move = Some(mv);
            best_score = score;
        }
    }

    (best_move, best_score)
}

/// Picks a move for `player`, searching to the end of the game.
///
/// Works on a private copy so `board` is never touched.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board, player: Player, options: SearchOptions) -> SearchResult {
    if options.corner_opening && board.moves_played() == 0 {
        debug!("Empty board, taking corner opening");
        return SearchResult {
            best_move: Some(Move::new(0, 0)),
            score: 0,
            nodes: 0,
        };
    }

    let mut scratch = board.clone();
    let depth = scratch.empty_count();
    let result = minimax(&mut scratch, depth, player);
    debug!(
        best_move = ?result.best_move,
        score = result.score,
        nodes = result.nodes,
        "Search complete"
    );
    result
}
