//! Terminal maze runner (default binary).
//!
//! Event-driven: the loop blocks on the next terminal event, applies it to
//! the session and redraws. There are no timers; nothing changes between key
//! presses.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_maze::config::MazeConfig;
use tui_maze::core::{GameSnapshot, GameState, PathFinder};
use tui_maze::input::{handle_key_event, is_movement, should_quit};
use tui_maze::logging;
use tui_maze::term::{FrameBuffer, MazeView, Overlay, TerminalRenderer, Viewport};
use tui_maze::types::GameAction;

fn main() -> Result<()> {
    let config = MazeConfig::from_env();
    let default_filter = if config.log_path.is_some() { "info" } else { "off" };
    logging::init(config.log_path.as_deref(), default_filter)?;

    let grid = config.load_grid().context("failed to load maze layout")?;
    let mut game = GameState::new(grid).context("maze layout is not playable")?;
    if config.hint_on_start {
        game.toggle_hint();
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, config: &MazeConfig) -> Result<()> {
    let view = MazeView::new(config.cell_width);
    let mut finder = PathFinder::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut overlay = Overlay::None;
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_with(&mut finder, &mut snap);
            view.render_into(game.grid(), &snap, overlay, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) => {
                match key.kind {
                    KeyEventKind::Press => {}
                    // Holding an arrow walks; other keys fire once.
                    KeyEventKind::Repeat if is_movement(key) => {}
                    KeyEventKind::Repeat | KeyEventKind::Release => continue,
                }

                if should_quit(key) {
                    log::info!("quit after {} moves", game.moves());
                    return Ok(());
                }

                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                match action {
                    GameAction::ToggleHelp => {
                        overlay = match overlay {
                            Overlay::None => Overlay::Help,
                            Overlay::Help => Overlay::None,
                        };
                    }
                    _ => {
                        overlay = Overlay::None;
                        game.apply_action(action);
                    }
                }
                dirty = true;
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
