//! Core maze logic - pure, deterministic, and testable
//!
//! This crate contains the maze model, the hint pathfinder and the session
//! state machine. It has no dependencies on terminals, input devices or I/O
//! beyond reading layout files, which makes it:
//!
//! - **Deterministic**: the same grid, position and goal always give the same hint route
//! - **Testable**: every rule is a plain method call
//! - **Portable**: any front-end can drive it through three operations and three queries
//!
//! # Module Structure
//!
//! - [`grid`]: the immutable W x H cell matrix and its legality queries
//! - [`path`]: breadth-first shortest path for the hint overlay
//! - [`game_state`]: the mutable session (player, win flag, hint flag)
//! - [`layout`]: the built-in garden maze and layout file loaders
//! - [`snapshot`]: read-only per-frame view for renderers
//! - [`error`]: the error taxonomy
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{layout, GameState};
//! use tui_maze_types::{Direction, GameStatus, MoveResult, Position};
//!
//! let mut game = GameState::new(layout::garden()).unwrap();
//! assert_eq!(game.position(), Position::new(1, 10));
//!
//! // First step up is open, the next one hits the hedge.
//! assert!(game.attempt_move(Direction::Up).is_accepted());
//! assert!(matches!(game.attempt_move(Direction::Up), MoveResult::Rejected(_)));
//!
//! game.toggle_hint();
//! let hint = game.current_hint_path();
//! assert_eq!(hint.last(), Some(&Position::new(10, 1)));
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod layout;
pub mod path;
pub mod snapshot;

pub use tui_maze_types as types;

// Re-export commonly used types for convenience
pub use error::MazeError;
pub use game_state::GameState;
pub use grid::Grid;
pub use path::{shortest_path, PathFinder};
pub use snapshot::GameSnapshot;
