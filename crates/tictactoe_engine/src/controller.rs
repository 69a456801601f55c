//! Turn control between a human and the search engine.
//!
//! The human always plays the minimizer and the computer the maximizer.
//! Input and output stay outside: callers feed human moves in and read the
//! phase back out.

use crate::rules::{apply_move, outcome};
use crate::search::{SearchOptions, choose_move};
use crate::{Board, Move, Outcome, Player, Score};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Side played by the human.
pub const HUMAN: Player = Player::Minimizer;

/// Side played by the computer.
pub const COMPUTER: Player = Player::Maximizer;

/// Who makes the first move, fixed at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FirstMover {
    /// The human opens.
    Human,
    /// The computer opens.
    Computer,
}

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to submit a move.
    AwaitingHumanMove,
    /// Waiting for the computer to search and play.
    AwaitingAiMove,
    /// The game has ended.
    GameOver(Outcome),
}

/// Error returned when a turn cannot be taken.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TurnError {
    /// The target cell is occupied or off the board.
    #[display("Move {} is not available", _0)]
    InvalidMove(Move),

    /// The operation does not match the side to move.
    #[display("It is not that side's turn")]
    OutOfTurn,

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for TurnError {}

/// What the computer did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTurn {
    /// Cell the computer played.
    pub chosen: Move,
    /// Minimax value of the position before the move.
    pub score: Score,
    /// Phase after the move.
    pub phase: Phase,
}

/// Runs one game: owns the live board and the phase.
#[derive(Debug, Clone)]
pub struct Controller {
    board: Board,
    phase: Phase,
    first: FirstMover,
    options: SearchOptions,
}

impl Controller {
    /// Starts a game on an empty board.
    #[instrument]
    pub fn new(first: FirstMover, options: SearchOptions) -> Self {
        let phase = match first {
            FirstMover::Human => Phase::AwaitingHumanMove,
            FirstMover::Computer => Phase::AwaitingAiMove,
        };
        info!(?phase, "Game started");
        Self {
            board: Board::new(),
            phase,
            first,
            options,
        }
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns who opened the game.
    pub fn first_mover(&self) -> FirstMover {
        self.first
    }

    /// Number of moves played so far.
    pub fn moves_played(&self) -> usize {
        self.board.moves_played()
    }

    /// Final outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Plays the human's move.
    ///
    /// An invalid move leaves board and phase unchanged so the caller can ask
    /// again.
    #[instrument(skip(self))]
    pub fn submit_human_move(&mut self, mv: Move) -> Result<Phase, TurnError> {
        self.expect_phase(Phase::AwaitingHumanMove)?;

        if !apply_move(&mut self.board, HUMAN, mv) {
            warn!("Human move rejected");
            return Err(TurnError::InvalidMove(mv));
        }

        Ok(self.advance(Phase::AwaitingAiMove))
    }

    /// Searches for the computer's move and plays it.
    #[instrument(skip(self))]
    pub fn play_ai_move(&mut self) -> Result<AiTurn, TurnError> {
        self.expect_phase(Phase::AwaitingAiMove)?;

        let result = choose_move(&self.board, COMPUTER, self.options);
        // A non-terminal board always has a legal move.
        let chosen = result.best_move().ok_or(TurnError::GameOver)?;
        if !apply_move(&mut self.board, COMPUTER, chosen) {
            return Err(TurnError::InvalidMove(chosen));
        }

        let phase = self.advance(Phase::AwaitingHumanMove);
        Ok(AiTurn {
            chosen,
            score: result.score(),
            phase,
        })
    }

    fn expect_phase(&self, wanted: Phase) -> Result<(), TurnError> {
        match self.phase {
            Phase::GameOver(_) => Err(TurnError::GameOver),
            phase if phase == wanted => Ok(()),
            _ => Err(TurnError::OutOfTurn),
        }
    }

    fn advance(&mut self, next: Phase) -> Phase {
        self.phase = match outcome(&self.board) {
            Some(result) => {
                info!(?result, moves = self.board.moves_played(), "Game over");
                Phase::GameOver(result)
            }
            None => next,
        };
        debug!(phase = ?self.phase, board = %self.board, "Turn complete");
        self.phase
    }
}
