//! Maze layouts: the built-in garden and loaders for layout files.
//!
//! Two file formats are understood:
//!
//! - **ASCII** (any extension other than `.json`): one row per line using the
//!   glyphs `#` `.` `S` `E` `~`. Blank lines and lines starting with `;` are
//!   ignored.
//! - **JSON** (`.json`): an array of rows, each an array of tag names
//!   (`"wall"`, `"path"`, `"start"`, `"end"`, `"hazard"` / `"water"`).

use std::fs;
use std::path::Path;

use crate::error::MazeError;
use crate::grid::Grid;
use crate::types::CellType;

/// The hedge maze: start bottom-left, gazebo top-right, one pond.
pub const GARDEN: [&str; 12] = [
    "############",
    "#...#.....E#",
    "#.#.#.####.#",
    "#.#......#.#",
    "#.######.#.#",
    "#.#....#...#",
    "#.#.##.###.#",
    "#...#....#.#",
    "#####.##.#.#",
    "#.....#..#.#",
    "#S#####~##.#",
    "############",
];

/// The built-in garden maze
pub fn garden() -> Grid {
    Grid::from_ascii(&GARDEN).expect("Invalid built-in layout")
}

/// Parse an ASCII layout
pub fn parse_ascii(text: &str) -> Result<Grid, MazeError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.starts_with(';'))
        .collect();
    Grid::from_ascii(&lines)
}

/// Parse a JSON layout (array of arrays of tag names)
pub fn parse_json(text: &str) -> Result<Grid, MazeError> {
    let names: Vec<Vec<String>> = serde_json::from_str(text)?;
    let rows = names
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|name| CellType::from_str(&name).ok_or(MazeError::UnknownCellType(name)))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Grid::from_rows(rows)
}

/// Load a layout file, picking the format from the extension.
pub fn load(path: impl AsRef<Path>) -> Result<Grid, MazeError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let grid = if is_json {
        parse_json(&text)?
    } else {
        parse_ascii(&text)?
    };
    log::info!(
        "loaded {}x{} layout from {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(grid)
}
