//! Console front end for tic-tac-toe against a minimax opponent.
//!
//! # Architecture
//!
//! - **Input**: parses typed moves and setup answers
//! - **Render**: draws the board with the chosen icons
//! - **Session**: runs one interactive game over any reader/writer
//! - **Analyze**: one-shot best-move lookup for a given position
//! - **Config**: TOML settings merged with command-line flags
//! - **Logging**: tracing subscriber with a filter reloaded from config

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod cli;
mod config;
mod input;
mod logging;
mod render;
mod session;

pub use analyze::{Side, best_move, describe};
pub use cli::{Cli, Command};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, Opener};
pub use input::{InputError, parse_icon, parse_move, parse_yes_no};
pub use logging::{FilterHandle, apply_config_filter, filter_layer, init_tracing};
pub use render::{Glyphs, Icon, render_board};
pub use session::{Session, SessionError};
