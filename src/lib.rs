//! Terminal hedge maze (workspace facade crate).
//!
//! The maze rules live in dedicated crates under `crates/`; this package
//! re-exports them as `tui_maze::{core,input,term,types}` and adds the
//! runtime glue shared by the binaries: configuration, logging setup and the
//! headless solver report.

pub mod config;
pub mod logging;
pub mod solve;

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
