use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_maze::core::{layout, shortest_path, GameSnapshot, GameState, Grid, PathFinder};
use tui_maze::term::{FrameBuffer, MazeView, Overlay, Viewport};
use tui_maze::types::{Direction, Position};

fn open_field(size: usize) -> Grid {
    let rows: Vec<String> = (0..size)
        .map(|y| {
            (0..size)
                .map(|x| match (x, y) {
                    (0, 0) => 'S',
                    _ if x == size - 1 && y == size - 1 => 'E',
                    _ => '.',
                })
                .collect()
        })
        .collect();
    Grid::from_ascii(&rows[..]).expect("valid field")
}

fn bench_garden_path(c: &mut Criterion) {
    let grid = layout::garden();
    let start = Position::new(1, 10);
    let goal = Position::new(10, 1);

    c.bench_function("garden_shortest_path", |b| {
        b.iter(|| shortest_path(black_box(&grid), black_box(start), black_box(goal)))
    });
}

fn bench_reused_finder(c: &mut Criterion) {
    let grid = open_field(64);
    let goal = Position::new(63, 63);
    let mut finder = PathFinder::new();
    let mut out = Vec::new();

    c.bench_function("open_64x64_fresh", |b| {
        b.iter(|| shortest_path(black_box(&grid), Position::new(0, 0), goal))
    });

    c.bench_function("open_64x64_reused", |b| {
        b.iter(|| finder.find_into(black_box(&grid), Position::new(0, 0), goal, &mut out))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(layout::garden()).expect("valid garden");

    c.bench_function("attempt_move_blocked", |b| {
        b.iter(|| state.attempt_move(black_box(Direction::Left)))
    });
}

fn bench_hint_frame(c: &mut Criterion) {
    let mut state = GameState::new(layout::garden()).expect("valid garden");
    state.toggle_hint();
    let view = MazeView::default();
    let viewport = Viewport::new(80, 24);
    let mut finder = PathFinder::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("hint_frame_80x24", |b| {
        b.iter(|| {
            state.snapshot_with(&mut finder, &mut snap);
            view.render_into(state.grid(), &snap, Overlay::None, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_garden_path,
    bench_reused_finder,
    bench_move,
    bench_hint_frame
);
criterion_main!(benches);
