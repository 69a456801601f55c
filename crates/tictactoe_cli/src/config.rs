//! Game configuration loaded from TOML.

use crate::render::Icon;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::FirstMover;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Who opens the game, as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opener {
    /// The human moves first.
    Human,
    /// The computer moves first.
    Computer,
}

impl From<Opener> for FirstMover {
    fn from(opener: Opener) -> Self {
        match opener {
            Opener::Human => FirstMover::Human,
            Opener::Computer => FirstMover::Computer,
        }
    }
}

/// Settings for an interactive game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Human icon. Prompted for when absent.
    #[serde(default)]
    icon: Option<Icon>,

    /// Who moves first. Prompted for when absent.
    #[serde(default)]
    first: Option<Opener>,

    /// Skip the search for the computer's opening move.
    #[serde(default = "default_corner_opening")]
    corner_opening: bool,

    /// Glyph drawn for empty cells.
    #[serde(default = "default_empty_glyph")]
    empty_glyph: char,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_corner_opening() -> bool {
    true
}

fn default_empty_glyph() -> char {
    '.'
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon: None,
            first: None,
            corner_opening: default_corner_opening(),
            empty_glyph: default_empty_glyph(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the given file, or the default file if it exists, or defaults.
    ///
    /// Only an explicitly named file is required to exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the human icon.
    pub fn with_icon(mut self, icon: Option<Icon>) -> Self {
        if icon.is_some() {
            self.icon = icon;
        }
        self
    }

    /// Overrides who moves first.
    pub fn with_first(mut self, first: Option<Opener>) -> Self {
        if first.is_some() {
            self.first = first;
        }
        self
    }

    /// Forces a full search for the opening move.
    pub fn with_full_opening_search(mut self, full: bool) -> Self {
        if full {
            self.corner_opening = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
