//! Error taxonomy for the maze core.

use thiserror::Error;

/// Everything the core can refuse to do.
///
/// Rejected moves are not errors; see [`crate::types::MoveResult`].
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("position ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("maze has no start cell")]
    MissingStart,

    #[error("maze has no end cell")]
    MissingGoal,

    #[error("maze has {count} start cells, expected exactly one")]
    MultipleStarts { count: usize },

    #[error("maze has {count} end cells, expected exactly one")]
    MultipleGoals { count: usize },

    #[error("maze has no cells")]
    EmptyGrid,

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        row: usize,
        column: usize,
        glyph: char,
    },

    #[error("unknown cell type {0:?}")]
    UnknownCellType(String),

    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl MazeError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            MazeError::OutOfBounds { .. } => "out_of_bounds",
            MazeError::MissingStart => "missing_start",
            MazeError::MissingGoal => "missing_goal",
            MazeError::MultipleStarts { .. } => "multiple_starts",
            MazeError::MultipleGoals { .. } => "multiple_goals",
            MazeError::EmptyGrid
            | MazeError::RaggedRow { .. }
            | MazeError::UnknownGlyph { .. }
            | MazeError::UnknownCellType(_) => "invalid_layout",
            MazeError::Io(_) => "io",
            MazeError::Json(_) => "invalid_json",
        }
    }
}
