//! Print the hint route for a layout as JSON.
//!
//! Usage: `maze-solve [LAYOUT]`. Without an argument the `MAZE_LAYOUT`
//! variable is used, and without that the built-in garden.

use anyhow::{Context, Result};

use tui_maze::config::MazeConfig;
use tui_maze::logging;
use tui_maze::solve::solve;

fn main() -> Result<()> {
    logging::init(None, "warn")?;

    let mut config = MazeConfig::from_env();
    if let Some(arg) = std::env::args_os().nth(1) {
        config.layout_path = Some(arg.into());
    }

    let grid = config.load_grid().context("failed to load maze layout")?;
    let report = solve(&grid).context("maze layout is not playable")?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
