//! tictactoe - play against a computer that searches the whole game tree.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_cli::{
    Cli, Command, Config, Session, SessionError, apply_config_filter, best_move, init_tracing,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let filter_handle = init_tracing();

    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_icon(cli.icon)
        .with_first(cli.first)
        .with_full_opening_search(cli.full_opening_search);

    apply_config_filter(filter_handle.as_ref(), &config)
        .context("Failed to apply configured log filter")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::BestMove {
            board,
            player,
            depth,
            json,
        } => best_move(&board, player, depth, json, &mut io::stdout().lock()).map(|_| ()),
    }
}

/// Run an interactive game on the terminal
#[instrument(skip(config))]
fn run_play(config: Config) -> Result<()> {
    info!("Starting interactive game");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    match Session::new(stdin, stdout, config).run() {
        Ok(outcome) => {
            info!(?outcome, "Game finished");
            Ok(())
        }
        Err(SessionError::Interrupted) => {
            eprintln!("\nGoodbye.");
            std::process::exit(130);
        }
        Err(e) => Err(e).context("Game session failed"),
    }
}
