//! Terminal rendering for the maze.
//!
//! A small, game-oriented rendering layer: the view paints the maze into a
//! framebuffer of styled glyphs, and the renderer flushes that framebuffer to
//! the terminal, rewriting only what changed since the last frame.
//!
//! Goals:
//! - Keep `core` free of any drawing concerns
//! - Keep the view pure so it can be tested without a terminal
//! - Allow control over aspect ratio (e.g. 2 columns per maze cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, MazeView, Overlay, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
