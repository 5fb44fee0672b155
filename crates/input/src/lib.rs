//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is no
//! repeat handling here: the caller forwards key presses, and forwards key
//! repeats only when [`is_movement`] says the key walks the player.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, is_movement, should_quit};
