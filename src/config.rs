//! Runtime configuration from environment variables.

use std::path::PathBuf;

use crate::core::{layout, Grid, MazeError};
use crate::types::{DEFAULT_CELL_WIDTH, MAX_CELL_WIDTH, MIN_CELL_WIDTH};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Layout file; the built-in garden is used when unset.
    pub layout_path: Option<PathBuf>,
    /// Log file for the interactive binary, which owns the terminal.
    pub log_path: Option<PathBuf>,
    /// Terminal columns per maze cell.
    pub cell_width: u16,
    /// Show the hint overlay from the first frame.
    pub hint_on_start: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            layout_path: None,
            log_path: None,
            cell_width: DEFAULT_CELL_WIDTH,
            hint_on_start: false,
        }
    }
}

impl MazeConfig {
    /// Create from environment variables
    ///
    /// - `MAZE_LAYOUT`: layout file path
    /// - `MAZE_LOG_PATH`: log file path
    /// - `MAZE_CELL_WIDTH`: columns per cell (clamped to 1..=4)
    /// - `MAZE_HINT`: "1" or "true" to start with the hint visible
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`MazeConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let layout_path = non_empty("MAZE_LAYOUT").map(PathBuf::from);
        let log_path = non_empty("MAZE_LOG_PATH").map(PathBuf::from);

        let cell_width = non_empty("MAZE_CELL_WIDTH")
            .and_then(|s| s.parse::<u16>().ok())
            .map(|w| w.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH))
            .unwrap_or(DEFAULT_CELL_WIDTH);

        let hint_on_start = non_empty("MAZE_HINT")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            layout_path,
            log_path,
            cell_width,
            hint_on_start,
        }
    }

    /// Load the configured layout, or the built-in garden.
    pub fn load_grid(&self) -> Result<Grid, MazeError> {
        match &self.layout_path {
            Some(path) => layout::load(path),
            None => Ok(layout::garden()),
        }
    }
}
