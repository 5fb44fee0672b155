//! Shortest-path correctness against an independent distance computation

use std::collections::VecDeque;

use tui_maze::core::{layout, shortest_path, Grid, PathFinder};
use tui_maze::types::{CellType, Position};

/// All-pairs-free reference: repeated relaxation until nothing changes.
/// Quadratic and slow, but shares no code with the BFS.
fn reference_distances(grid: &Grid, origin: Position) -> Vec<Option<usize>> {
    let w = grid.width();
    let h = grid.height();
    let mut dist: Vec<Option<usize>> = vec![None; w * h];
    dist[origin.y as usize * w + origin.x as usize] = Some(0);

    let mut changed = true;
    while changed {
        changed = false;
        for y in 0..h {
            for x in 0..w {
                let here = Position::new(x as i32, y as i32);
                if !grid.is_enterable(here) {
                    continue;
                }
                let best = [(0, 1), (0, -1), (1, 0), (-1, 0)]
                    .iter()
                    .map(|&(dx, dy)| Position::new(here.x + dx, here.y + dy))
                    .filter(|p| grid.contains(*p))
                    .filter_map(|p| dist[p.y as usize * w + p.x as usize])
                    .min()
                    .map(|d| d + 1);
                let slot = &mut dist[y * w + x];
                if let Some(candidate) = best {
                    if slot.map_or(true, |cur| candidate < cur) {
                        *slot = Some(candidate);
                        changed = true;
                    }
                }
            }
        }
    }
    dist
}

/// Plain BFS that queues whole paths and marks cells visited on dequeue.
/// Neighbours are tried up, right, down, left.
fn reference_route(grid: &Grid, origin: Position, goal: Position) -> Vec<Position> {
    if origin == goal {
        return Vec::new();
    }
    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::from([(origin, Vec::new())]);

    while let Some((here, route)) = queue.pop_front() {
        let idx = here.y as usize * grid.width() + here.x as usize;
        if visited[idx] {
            continue;
        }
        visited[idx] = true;
        if here == goal {
            return route;
        }
        for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
            let next = Position::new(here.x + dx, here.y + dy);
            if !grid.is_enterable(next) || visited[next.y as usize * grid.width() + next.x as usize] {
                continue;
            }
            let mut longer = route.clone();
            longer.push(next);
            queue.push_back((next, longer));
        }
    }
    Vec::new()
}

fn assert_valid_route(grid: &Grid, origin: Position, goal: Position, path: &[Position]) {
    let mut prev = origin;
    let mut seen = vec![origin];
    for &step in path {
        assert!(prev.is_adjacent(step), "{prev} -> {step} is not a single step");
        assert!(grid.is_enterable(step), "{step} is not enterable");
        assert!(!seen.contains(&step), "{step} repeated");
        seen.push(step);
        prev = step;
    }
    assert_eq!(path.last(), Some(&goal));
}

fn grid_from_bits(w: usize, h: usize, bits: u32) -> Grid {
    let rows = (0..h)
        .map(|y| {
            (0..w)
                .map(|x| {
                    if bits & (1 << (y * w + x)) != 0 {
                        CellType::Wall
                    } else {
                        CellType::Path
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

fn check_all_pairs(grid: &Grid, finder: &mut PathFinder) {
    let mut out = Vec::new();
    let open: Vec<Position> = (0..grid.len())
        .map(|i| Position::new((i % grid.width()) as i32, (i / grid.width()) as i32))
        .filter(|&p| grid.is_enterable(p))
        .collect();

    for &origin in &open {
        let dist = reference_distances(grid, origin);
        for &goal in &open {
            let expected = dist[goal.y as usize * grid.width() + goal.x as usize];
            let found = finder.find_into(grid, origin, goal, &mut out);
            match expected {
                Some(0) => {
                    assert!(found);
                    assert!(out.is_empty());
                }
                Some(d) => {
                    assert!(found, "{origin} -> {goal} should be reachable");
                    assert_eq!(out.len(), d, "{origin} -> {goal} is not shortest");
                    assert_valid_route(grid, origin, goal, &out);
                }
                None => {
                    assert!(!found);
                    assert!(out.is_empty(), "{origin} -> {goal} should be unreachable");
                }
            }
        }
    }
}

#[test]
fn test_exhaustive_3x3() {
    let mut finder = PathFinder::new();
    for bits in 0..(1u32 << 9) {
        check_all_pairs(&grid_from_bits(3, 3, bits), &mut finder);
    }
}

#[test]
fn test_sampled_4x4() {
    let mut finder = PathFinder::new();
    // Fixed LCG so the sample is reproducible.
    let mut state: u32 = 12345;
    for _ in 0..200 {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
        // About a quarter of the cells end up as walls.
        let bits = (state >> 8) & (state >> 3) & 0xFFFF;
        check_all_pairs(&grid_from_bits(4, 4, bits), &mut finder);
    }
}

fn check_same_routes(grid: &Grid, finder: &mut PathFinder) {
    let mut out = Vec::new();
    let cells: Vec<Position> = (0..grid.len())
        .map(|i| Position::new((i % grid.width()) as i32, (i / grid.width()) as i32))
        .collect();

    for &origin in &cells {
        for &goal in &cells {
            finder.find_into(grid, origin, goal, &mut out);
            assert_eq!(
                out,
                reference_route(grid, origin, goal),
                "{origin} -> {goal} on {:?}",
                grid.to_ascii()
            );
        }
    }
}

#[test]
fn test_tie_breaking_matches_plain_bfs() {
    let mut finder = PathFinder::new();
    for (w, h) in [(3, 3), (4, 3), (2, 5)] {
        for bits in 0..(1u32 << (w * h)) {
            check_same_routes(&grid_from_bits(w, h, bits), &mut finder);
        }
    }
}

#[test]
fn test_garden_routes_match_plain_bfs() {
    let grid = layout::garden();
    let mut finder = PathFinder::new();
    check_same_routes(&grid, &mut finder);
    assert_eq!(
        reference_route(&grid, Position::new(1, 10), Position::new(10, 1)).len(),
        36
    );
}

#[test]
fn test_garden_route() {
    let grid = layout::garden();
    let path = shortest_path(&grid, Position::new(1, 10), Position::new(10, 1));

    assert_eq!(path.len(), 36);
    assert_eq!(path.first(), Some(&Position::new(1, 9)));
    assert_eq!(path.last(), Some(&Position::new(10, 1)));
    assert_valid_route(&grid, Position::new(1, 10), Position::new(10, 1), &path);

    let dist = reference_distances(&grid, Position::new(1, 10));
    assert_eq!(dist[grid.width() + 10], Some(36));
}

#[test]
fn test_deterministic() {
    let grid = layout::garden();
    let a = shortest_path(&grid, Position::new(7, 10), Position::new(10, 1));
    let b = shortest_path(&grid, Position::new(7, 10), Position::new(10, 1));
    assert_eq!(a, b);
    assert_eq!(a.len(), 34);
}

#[test]
fn test_disconnected_regions() {
    let grid = Grid::from_ascii(&[
        "#######",
        "#S.#..#",
        "#..#.E#",
        "#######",
    ])
    .unwrap();
    assert!(shortest_path(&grid, Position::new(1, 1), Position::new(5, 2)).is_empty());
    // Within the right-hand region the goal is still reachable.
    assert_eq!(
        shortest_path(&grid, Position::new(4, 1), Position::new(5, 2)).len(),
        2
    );
}

#[test]
fn test_wall_origin_still_expands() {
    // A hint asked from inside a wall (not reachable in play) searches from
    // the wall cell's open neighbours.
    let grid = Grid::from_ascii(&["S#E"]).unwrap();
    assert_eq!(
        shortest_path(&grid, Position::new(1, 0), Position::new(2, 0)),
        vec![Position::new(2, 0)]
    );
}
