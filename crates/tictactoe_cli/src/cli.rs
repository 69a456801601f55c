//! Command-line interface for tictactoe.

use crate::analyze::Side;
use crate::config::Opener;
use crate::render::Icon;
use clap::{Parser, Subcommand};

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Your icon; asked interactively when omitted
    #[arg(long, value_enum, global = true)]
    pub icon: Option<Icon>,

    /// Who moves first; asked interactively when omitted
    #[arg(long, value_enum, global = true)]
    pub first: Option<Opener>,

    /// Search the computer's opening move instead of taking a corner
    #[arg(long, global = true)]
    pub full_opening_search: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Print the minimax move and score for a position
    BestMove {
        /// Board in row-major notation: A minimizer, B maximizer, . empty (e.g. "BB./AA./...")
        board: String,

        /// Side to move
        #[arg(short, long, value_enum)]
        player: Side,

        /// Plies to search (defaults to the number of empty cells)
        #[arg(short, long)]
        depth: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
