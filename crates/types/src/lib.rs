//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the maze game.
//! They are plain data with no game rules attached, so they can be shared by
//! the core logic, the terminal renderer and the input mapping alike.
//!
//! # Coordinates
//!
//! Positions are `(x, y)` pairs where `x` is the column and `y` is the row.
//! Row 0 is the top of the maze. Both components are signed so that a
//! candidate position one step outside the grid can still be represented and
//! rejected by the grid instead of wrapping around.
//!
//! # Cell tags
//!
//! | Tag | Name | Glyph | Enterable |
//! |-----|------|-------|-----------|
//! | `Wall` | `wall` | `#` | no |
//! | `Path` | `path` | `.` | yes |
//! | `Start` | `start` | `S` | yes |
//! | `End` | `end` | `E` | yes |
//! | `Hazard` | `hazard` (alias `water`) | `~` | yes |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{CellType, Direction, GameAction, Position};
//!
//! let start = Position::new(1, 10);
//! assert_eq!(start + Direction::Up, Position::new(1, 9));
//!
//! assert_eq!(CellType::from_str("water"), Some(CellType::Hazard));
//! assert!(!CellType::Wall.is_enterable());
//!
//! let action = GameAction::from_str("left").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//! ```

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Default terminal columns per maze cell (compensates for glyph aspect ratio)
pub const DEFAULT_CELL_WIDTH: u16 = 2;

/// Narrowest supported cell width
pub const MIN_CELL_WIDTH: u16 = 1;

/// Widest supported cell width
pub const MAX_CELL_WIDTH: u16 = 4;

/// Classification of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Wall,
    Path,
    Start,
    End,
    #[serde(alias = "water")]
    Hazard,
}

impl CellType {
    /// Every tag except `Wall` can be occupied by the player.
    pub fn is_enterable(&self) -> bool {
        !matches!(self, CellType::Wall)
    }

    /// Parse from tag name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wall" => Some(CellType::Wall),
            "path" => Some(CellType::Path),
            "start" => Some(CellType::Start),
            "end" | "goal" => Some(CellType::End),
            "hazard" | "water" => Some(CellType::Hazard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Wall => "wall",
            CellType::Path => "path",
            CellType::Start => "start",
            CellType::End => "end",
            CellType::Hazard => "hazard",
        }
    }

    /// Parse from an ASCII layout glyph. A space is read as open path.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellType::Wall),
            '.' | ' ' => Some(CellType::Path),
            'S' | 's' => Some(CellType::Start),
            'E' | 'e' => Some(CellType::End),
            '~' => Some(CellType::Hazard),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CellType::Wall => '#',
            CellType::Path => '.',
            CellType::Start => 'S',
            CellType::End => 'E',
            CellType::Hazard => '~',
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orthogonal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Neighbour expansion order used by the pathfinder: up, right, down, left.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector `(dx, dy)`; `dy` grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" | "north" => Some(Direction::Up),
            "right" | "r" | "east" => Some(Direction::Right),
            "down" | "d" | "south" => Some(Direction::Down),
            "left" | "l" | "west" => Some(Direction::Left),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell address: `x` is the column, `y` the row (0 = top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan distance
    pub fn distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.distance(other) == 1
    }
}

impl Add<Direction> for Position {
    type Output = Position;

    fn add(self, dir: Direction) -> Position {
        self.step(dir)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Session status. `Won` is terminal until the session is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
        }
    }
}

/// Successful move outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved onto an ordinary enterable cell.
    Moved,
    /// The player moved onto the goal; the session is now won.
    Won,
}

/// Why a move was refused. These are expected outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The target cell is a wall or outside the grid.
    Blocked,
    /// The session is already won.
    GameOver,
}

/// Result of a single movement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Accepted(MoveOutcome),
    Rejected(RejectReason),
}

impl MoveResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveResult::Accepted(MoveOutcome::Moved) => "moved",
            MoveResult::Accepted(MoveOutcome::Won) => "won",
            MoveResult::Rejected(RejectReason::Blocked) => "blocked",
            MoveResult::Rejected(RejectReason::GameOver) => "game_over",
        }
    }
}

/// Discrete input intents delivered by the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Reset,
    ToggleHint,
    /// Presentation only; the session ignores it.
    ToggleHelp,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(GameAction::Move(dir));
        }
        match s.to_lowercase().as_str() {
            "reset" | "restart" => Some(GameAction::Reset),
            "hint" | "togglehint" => Some(GameAction::ToggleHint),
            "help" | "togglehelp" => Some(GameAction::ToggleHelp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Reset => "reset",
            GameAction::ToggleHint => "toggleHint",
            GameAction::ToggleHelp => "toggleHelp",
        }
    }
}
