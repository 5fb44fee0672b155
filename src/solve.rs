//! Headless solve of a layout: the hint route from start to goal.

use serde::Serialize;

use crate::core::{shortest_path, Grid, MazeError};
use crate::types::Position;

/// What `maze-solve` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub width: usize,
    pub height: usize,
    pub start: Position,
    pub goal: Position,
    pub reachable: bool,
    pub steps: usize,
    pub path: Vec<Position>,
}

/// Validate `grid` and compute the route from its start to its goal.
pub fn solve(grid: &Grid) -> Result<SolveReport, MazeError> {
    grid.validate()?;
    let start = grid.find_start()?;
    let goal = grid.find_goal()?;
    let path = shortest_path(grid, start, goal);
    let reachable = start == goal || !path.is_empty();
    if !reachable {
        log::warn!("goal {goal} is not reachable from {start}");
    }

    Ok(SolveReport {
        width: grid.width(),
        height: grid.height(),
        start,
        goal,
        reachable,
        steps: path.len(),
        path,
    })
}
