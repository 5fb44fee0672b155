//! Shortest-path search for the hint overlay.
//!
//! Breadth-first search over enterable cells with unit edge cost and
//! orthogonal moves only. Neighbours are expanded in the fixed order up,
//! right, down, left, so the returned route is deterministic: among equally
//! short routes it is the one found first under that order.
//!
//! A path excludes the origin and includes the destination. An empty path
//! means either "already there" or "unreachable"; check `origin == goal`
//! first if the distinction matters, or use the return value of
//! [`PathFinder::find_into`].

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::types::Position;

/// Marks a cell with no recorded predecessor.
const UNSEEN: usize = usize::MAX;

/// BFS with reusable buffers.
///
/// The front-end asks for a hint every frame while it is visible; keeping one
/// `PathFinder` around avoids reallocating the queue and the per-cell maps.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    queue: VecDeque<usize>,
    /// Set when a cell is dequeued.
    visited: Vec<bool>,
    /// Predecessor of each discovered cell (flat index), `UNSEEN` otherwise.
    prev: Vec<usize>,
}

impl PathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self, len: usize) {
        self.queue.clear();
        self.visited.clear();
        self.visited.resize(len, false);
        self.prev.clear();
        self.prev.resize(len, UNSEEN);
    }

    /// Compute the shortest route from `origin` to `goal` into `out`.
    ///
    /// Returns `true` if `goal` was reached (including `origin == goal`, where
    /// `out` is left empty) and `false` if no route exists or either endpoint
    /// lies outside the grid.
    pub fn find_into(
        &mut self,
        grid: &Grid,
        origin: Position,
        goal: Position,
        out: &mut Vec<Position>,
    ) -> bool {
        out.clear();
        if origin == goal {
            return true;
        }
        let (Some(start), Some(target)) = (grid.index(origin), grid.index(goal)) else {
            return false;
        };

        self.reset(grid.len());
        self.prev[start] = start;
        self.queue.push_back(start);

        while let Some(idx) = self.queue.pop_front() {
            if self.visited[idx] {
                continue;
            }
            self.visited[idx] = true;

            if idx == target {
                self.reconstruct(grid, start, target, out);
                return true;
            }

            for next in grid.neighbors(grid.position_of(idx)) {
                let Some(n) = grid.index(next) else {
                    continue;
                };
                if self.visited[n] || self.prev[n] != UNSEEN {
                    continue;
                }
                self.prev[n] = idx;
                self.queue.push_back(n);
            }
        }

        log::trace!("no route from {origin} to {goal}");
        false
    }

    fn reconstruct(&self, grid: &Grid, start: usize, target: usize, out: &mut Vec<Position>) {
        let mut cur = target;
        while cur != start {
            out.push(grid.position_of(cur));
            cur = self.prev[cur];
        }
        out.reverse();
    }
}

/// Shortest route from `origin` to `goal`, excluding `origin`.
///
/// Empty when `origin == goal` or when `goal` cannot be reached.
pub fn shortest_path(grid: &Grid, origin: Position, goal: Position) -> Vec<Position> {
    let mut out = Vec::new();
    PathFinder::new().find_into(grid, origin, goal, &mut out);
    out
}
