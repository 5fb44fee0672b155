//! MazeView: maps a maze grid and a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Grid};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{CellType, Position, DEFAULT_CELL_WIDTH, MAX_CELL_WIDTH, MIN_CELL_WIDTH};

const GROUND: Rgb = Rgb::new(45, 106, 49);
const HEDGE: Rgb = Rgb::new(76, 175, 80);
const WATER: Rgb = Rgb::new(100, 181, 246);
const GOLD: Rgb = Rgb::new(255, 215, 0);
const HEDGEHOG: Rgb = Rgb::new(205, 133, 63);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const DIALOG_BG: Rgb = Rgb::new(220, 237, 200);
const DIALOG_FG: Rgb = Rgb::new(27, 94, 32);

const WON_LINES: [&str; 4] = ["YOU WON!", "The hedgehog made it", "to the gazebo!", "r: play again"];

const HELP_LINES: [&str; 6] = [
    "HOW TO PLAY",
    "Guide the hedgehog",
    "to the gazebo.",
    "Arrows/WASD: move",
    "Space: show path",
    "?: close help",
];

const KEY_LINES: [&str; 5] = ["arrows move", "space  hint", "r      reset", "?      help", "q      quit"];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Modal dialog drawn over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board geometry for one frame: top-left corner of the border and its size.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Renders the maze, the player, the hint route and a side panel.
#[derive(Debug, Clone)]
pub struct MazeView {
    /// Terminal columns per maze cell.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for MazeView {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH)
    }
}

impl MazeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(MIN_CELL_WIDTH, MAX_CELL_WIDTH),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        grid: &Grid,
        snap: &GameSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let w = (grid.width() as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (grid.height() as u16).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        self.draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), PANEL_BG));

        for (y, row) in grid.rows().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                self.draw_tile(fb, frame, Position::new(x as i32, y as i32), tag);
            }
        }

        if snap.hint_visible {
            let dot = Style::new(GOLD, GROUND);
            for &pos in &snap.hint {
                if pos != snap.goal {
                    self.mark_cell(fb, frame, pos, '•', dot);
                }
            }
        }

        self.mark_cell(fb, frame, snap.player, '@', Style::new(HEDGEHOG, GROUND).bold());

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.is_won() {
            self.draw_dialog(fb, frame, &WON_LINES);
        } else if overlay == Overlay::Help {
            self.draw_dialog(fb, frame, &HELP_LINES);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        grid: &Grid,
        snap: &GameSnapshot,
        overlay: Overlay,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, snap, overlay, viewport, &mut fb);
        fb
    }

    /// Terminal coordinates of the top-left column of a maze cell.
    fn cell_origin(&self, frame: Frame, pos: Position) -> Option<(u16, u16)> {
        let x = u16::try_from(pos.x).ok()?;
        let y = u16::try_from(pos.y).ok()?;
        Some((
            frame.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w)),
            frame.y.saturating_add(1).saturating_add(y),
        ))
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Frame, pos: Position, tag: CellType) {
        let Some((px, py)) = self.cell_origin(frame, pos) else {
            return;
        };
        match tag {
            CellType::Wall => fb.fill_rect(px, py, self.cell_w, 1, '█', Style::new(HEDGE, GROUND)),
            CellType::Path => fb.fill_rect(px, py, self.cell_w, 1, ' ', Style::new(HEDGE, GROUND)),
            CellType::Start => self.mark_cell(fb, frame, pos, '·', Style::new(HEDGE, GROUND).dim()),
            CellType::End => self.mark_cell(fb, frame, pos, '⌂', Style::new(GOLD, GROUND).bold()),
            CellType::Hazard => fb.fill_rect(px, py, self.cell_w, 1, '≈', Style::new(WATER, GROUND)),
        }
    }

    /// Paint the cell background and a single glyph in its middle column.
    fn mark_cell(&self, fb: &mut FrameBuffer, frame: Frame, pos: Position, ch: char, style: Style) {
        let Some((px, py)) = self.cell_origin(frame, pos) else {
            return;
        };
        fb.fill_rect(px, py, self.cell_w, 1, ' ', Style::new(style.fg, style.bg));
        fb.put_char(px.saturating_add((self.cell_w - 1) / 2), py, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: Style) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATUS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.status.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HINT", label);
        y = y.saturating_add(1);
        if snap.hint_visible {
            fb.put_str(panel_x, y, "ON", Style::new(GOLD, PANEL_BG));
            if !snap.hint.is_empty() {
                fb.put_u32(panel_x + 3, y, snap.hint.len() as u32, value.dim());
            }
        } else {
            fb.put_str(panel_x, y, "OFF", value);
        }
        y = y.saturating_add(2);

        for line in KEY_LINES {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, value.dim());
            y = y.saturating_add(1);
        }
    }

    fn draw_dialog(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let text_w = lines.iter().map(|l| l.chars().count() as u16).max().unwrap_or(0);
        let w = text_w.saturating_add(4);
        let h = (lines.len() as u16).saturating_add(2);
        let x = frame.x.saturating_add(frame.w.saturating_sub(w) / 2);
        let y = frame.y.saturating_add(frame.h.saturating_sub(h) / 2);

        let body = Style::new(DIALOG_FG, DIALOG_BG);
        fb.fill_rect(x, y, w, h, ' ', body);
        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { body.bold() } else { body };
            fb.put_str_centered(x, y + 1 + i as u16, w, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn tiny() -> GameState {
        GameState::new(Grid::from_ascii(&["#####", "#S~E#", "#####"]).unwrap()).unwrap()
    }

    #[test]
    fn test_cell_width_is_clamped() {
        assert_eq!(MazeView::new(0).cell_w(), MIN_CELL_WIDTH);
        assert_eq!(MazeView::new(9).cell_w(), MAX_CELL_WIDTH);
    }

    #[test]
    fn test_tiles_are_drawn_inside_border() {
        let state = tiny();
        let view = MazeView::default().with_anchor_y(AnchorY::Top);
        // 5 cells * 2 + 2 border = 12 wide, 3 + 2 = 5 tall.
        let fb = view.render(state.grid(), &state.snapshot(), Overlay::None, Viewport::new(12, 5));

        assert_eq!(fb.row_text(0), "┌──────────┐");
        assert_eq!(fb.row_text(1), "│██████████│");
        // Player sits on start, then water, then the gazebo.
        assert_eq!(fb.row_text(2), "│██@ ≈≈⌂ ██│");
        assert_eq!(fb.row_text(4), "└──────────┘");
    }
}
