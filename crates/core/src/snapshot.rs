//! Per-frame session snapshot handed to renderers.

use serde::{Deserialize, Serialize};

use crate::types::{GameStatus, Position};

/// Read-only view of a session, everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player: Position,
    pub start: Position,
    pub goal: Position,
    pub status: GameStatus,
    pub hint_visible: bool,
    pub moves: u32,
    /// Hint route from `player` to `goal`; empty while the hint is hidden.
    pub hint: Vec<Position>,
}

impl GameSnapshot {
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Check if `pos` lies on the visible hint route
    pub fn is_hint(&self, pos: Position) -> bool {
        self.hint_visible && self.hint.contains(&pos)
    }
}
