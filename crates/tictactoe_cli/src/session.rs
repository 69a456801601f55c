//! Interactive game session over any reader and writer.

use crate::config::{Config, Opener};
use crate::input::{InputError, parse_icon, parse_move, parse_yes_no};
use crate::render::{Glyphs, Icon, render_board};
use derive_more::Display;
use std::io::{self, BufRead, Write};
use tictactoe_engine::{Controller, Move, Outcome, Phase, SearchOptions, TurnError};
use tracing::{debug, info, instrument, warn};

/// Why a session stopped before the game ended.
#[derive(Debug, Display)]
pub enum SessionError {
    /// Input ended or was interrupted.
    #[display("Input closed")]
    Interrupted,

    /// Reading or writing the terminal failed.
    #[display("I/O error: {}", _0)]
    Io(io::Error),

    /// The engine refused a turn the session expected to be legal.
    #[display("Turn error: {}", _0)]
    Turn(TurnError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(e) => Some(e),
            SessionError::Turn(e) => Some(e),
            SessionError::Interrupted => None,
        }
    }
}

impl From<TurnError> for SessionError {
    fn from(err: TurnError) -> Self {
        SessionError::Turn(err)
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof => SessionError::Interrupted,
            _ => SessionError::Io(err),
        }
    }
}

/// One game between a human at the terminal and the computer.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session; nothing is read until [`Session::run`].
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays a full game and returns its outcome.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        let icon = match *self.config.icon() {
            Some(icon) => icon,
            None => self.ask_icon()?,
        };
        let first = match *self.config.first() {
            Some(first) => first,
            None => self.ask_first()?,
        };
        info!(%icon, ?first, "Session configured");

        let glyphs = Glyphs::for_human(icon, *self.config.empty_glyph());
        let options = SearchOptions {
            corner_opening: *self.config.corner_opening(),
        };
        let mut game = Controller::new(first.into(), options);

        let outcome = loop {
            match game.phase() {
                Phase::GameOver(outcome) => break outcome,
                Phase::AwaitingHumanMove => {
                    write!(self.output, "\n{}", render_board(game.board(), &glyphs))?;
                    self.human_turn(&mut game, icon)?;
                }
                Phase::AwaitingAiMove => {
                    let turn = game.play_ai_move()?;
                    debug!(chosen = %turn.chosen, score = turn.score, "Computer moved");
                    writeln!(
                        self.output,
                        "Computer ({}) plays cell {}",
                        icon.other(),
                        cell_label(turn.chosen)
                    )?;
                }
            }
        };

        write!(self.output, "\n{}", render_board(game.board(), &glyphs))?;
        let verdict = match outcome {
            Outcome::MinimizerWin => "You win!",
            Outcome::MaximizerWin => "You lose!",
            Outcome::Draw => "It's a draw.",
        };
        writeln!(self.output, "{}", verdict)?;
        self.output.flush()?;
        info!(?outcome, "Session finished");
        Ok(outcome)
    }

    fn human_turn(&mut self, game: &mut Controller, icon: Icon) -> Result<(), SessionError> {
        loop {
            let line = self.prompt(&format!("Your move ({}), cell 1-9 or \"row col\": ", icon))?;
            let mv = match parse_move(&line) {
                Ok(mv) => mv,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            match game.submit_human_move(mv) {
                Ok(_) => return Ok(()),
                Err(TurnError::InvalidMove(mv)) => {
                    warn!(%mv, "Rejected human move");
                    writeln!(self.output, "Cell {} is taken or off the board", mv)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn ask_icon(&mut self) -> Result<Icon, SessionError> {
        self.ask("Choose X or O: ", parse_icon)
    }

    fn ask_first(&mut self) -> Result<Opener, SessionError> {
        let human_first = self.ask("Go first? [y/n]: ", parse_yes_no)?;
        Ok(if human_first {
            Opener::Human
        } else {
            Opener::Computer
        })
    }

    fn ask<T>(
        &mut self,
        question: &str,
        parse: impl Fn(&str) -> Result<T, InputError>,
    ) -> Result<T, SessionError> {
        loop {
            let line = self.prompt(question)?;
            match parse(&line) {
                Ok(answer) => return Ok(answer),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Prints `question` and reads one line. End of input is an interrupt.
    fn prompt(&mut self, question: &str) -> Result<String, SessionError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Err(SessionError::Interrupted);
        }
        Ok(line)
    }
}

fn cell_label(mv: Move) -> String {
    match mv.cell_number() {
        Some(cell) => format!("{} {}", cell, mv),
        None => mv.to_string(),
    }
}
