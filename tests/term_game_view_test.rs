use tui_maze::core::{layout, GameState};
use tui_maze::term::{AnchorY, FrameBuffer, MazeView, Overlay, Viewport};
use tui_maze::types::Direction;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let game = GameState::new(layout::garden()).unwrap();
    let view = MazeView::default();

    // 12 cells * 2 columns + border = 26 wide, 12 + 2 = 14 tall.
    let fb = view.render(game.grid(), &game.snapshot(), Overlay::None, Viewport::new(26, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(25, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_player_at_start() {
    let game = GameState::new(layout::garden()).unwrap();
    let fb = MazeView::default().render(
        game.grid(),
        &game.snapshot(),
        Overlay::None,
        Viewport::new(26, 14),
    );
    // Start (1, 10): column 1 + 1 * 2, row 1 + 10.
    assert_eq!(fb.get(3, 11).unwrap().ch, '@');
    // Gazebo at (10, 1).
    assert_eq!(fb.get(21, 2).unwrap().ch, '⌂');
}

#[test]
fn term_view_draws_hint_dots_only_when_visible() {
    let mut game = GameState::new(layout::garden()).unwrap();
    let view = MazeView::default();
    let vp = Viewport::new(26, 14);

    let count_dots = |fb: &FrameBuffer| fb.glyphs().iter().filter(|g| g.ch == '•').count();

    let fb = view.render(game.grid(), &game.snapshot(), Overlay::None, vp);
    assert_eq!(count_dots(&fb), 0);

    game.toggle_hint();
    let fb = view.render(game.grid(), &game.snapshot(), Overlay::None, vp);
    // Every route cell except the gazebo itself.
    assert_eq!(count_dots(&fb), 35);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new(layout::garden()).unwrap();
    game.attempt_move(Direction::Up);
    let view = MazeView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(game.grid(), &game.snapshot(), Overlay::None, Viewport::new(60, 20));
    let text = screen_text(&fb);
    assert!(text.contains("MOVES"));
    assert!(text.contains("playing"));
    assert!(text.contains("OFF"));

    let narrow = view.render(game.grid(), &game.snapshot(), Overlay::None, Viewport::new(30, 20));
    assert!(!screen_text(&narrow).contains("MOVES"));
}

#[test]
fn term_view_shows_win_dialog() {
    let grid = tui_maze::core::Grid::from_ascii(&[
        "##########",
        "#S......E#",
        "##########",
    ])
    .unwrap();
    let mut game = GameState::new(grid).unwrap();
    while !game.is_won() {
        game.attempt_move(Direction::Right);
    }

    let fb = MazeView::default().render(game.grid(), &game.snapshot(), Overlay::Help, Viewport::new(40, 12));
    let text = screen_text(&fb);
    assert!(text.contains("YOU WON!"));
    // The win dialog takes precedence over help.
    assert!(!text.contains("HOW TO PLAY"));
}

#[test]
fn term_view_shows_help_dialog() {
    let game = GameState::new(layout::garden()).unwrap();
    let fb = MazeView::default().render(game.grid(), &game.snapshot(), Overlay::Help, Viewport::new(26, 14));
    let text = screen_text(&fb);
    assert!(text.contains("HOW TO PLAY"));
    assert!(text.contains("Space: show path"));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let game = GameState::new(layout::garden()).unwrap();
    for (w, h) in [(0, 0), (1, 1), (5, 3), (26, 2)] {
        let fb = MazeView::default().render(game.grid(), &game.snapshot(), Overlay::Help, Viewport::new(w, h));
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}
