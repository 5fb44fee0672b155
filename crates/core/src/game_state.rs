//! Game state module - the mutable play session
//!
//! `GameState` owns the immutable grid and the only mutable session fields:
//! player position, win status, hint visibility and the move counter. All
//! transitions go through its public methods.

use crate::error::MazeError;
use crate::grid::Grid;
use crate::path::{shortest_path, PathFinder};
use crate::snapshot::GameSnapshot;
use crate::types::{
    Direction, GameAction, GameStatus, MoveOutcome, MoveResult, Position, RejectReason,
};

/// A single play-through of one maze
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    start: Position,
    goal: Position,
    player: Position,
    status: GameStatus,
    hint_visible: bool,
    /// Accepted moves since the last reset.
    moves: u32,
}

impl GameState {
    /// Start a session on `grid`.
    ///
    /// Fails if the grid does not have exactly one start and one end cell.
    pub fn new(grid: Grid) -> Result<Self, MazeError> {
        grid.validate()?;
        let start = grid.find_start()?;
        let goal = grid.find_goal()?;
        log::info!(
            "new session on {}x{} maze, start {start}, goal {goal}",
            grid.width(),
            grid.height()
        );

        Ok(Self {
            grid,
            start,
            goal,
            player: start,
            status: GameStatus::Playing,
            hint_visible: false,
            moves: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn position(&self) -> Position {
        self.player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Try to move the player one cell in `direction`
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        if self.status == GameStatus::Won {
            return MoveResult::Rejected(RejectReason::GameOver);
        }

        let candidate = self.player + direction;
        if !self.grid.is_enterable(candidate) {
            log::debug!("move {direction} from {} blocked", self.player);
            return MoveResult::Rejected(RejectReason::Blocked);
        }

        self.player = candidate;
        self.moves = self.moves.saturating_add(1);

        if self.grid.is_goal(candidate) {
            self.status = GameStatus::Won;
            log::info!("goal reached at {candidate} after {} moves", self.moves);
            MoveResult::Accepted(MoveOutcome::Won)
        } else {
            MoveResult::Accepted(MoveOutcome::Moved)
        }
    }

    /// Return to the initial session state. The grid is untouched.
    pub fn reset(&mut self) {
        self.player = self.start;
        self.status = GameStatus::Playing;
        self.hint_visible = false;
        self.moves = 0;
        log::info!("session reset");
    }

    /// Show or hide the hint overlay
    pub fn toggle_hint(&mut self) {
        self.hint_visible = !self.hint_visible;
        log::debug!("hint visible: {}", self.hint_visible);
    }

    /// Route from the player to the goal, or empty while the hint is hidden.
    pub fn current_hint_path(&self) -> Vec<Position> {
        if !self.hint_visible {
            return Vec::new();
        }
        shortest_path(&self.grid, self.player, self.goal)
    }

    /// Like [`GameState::current_hint_path`], reusing the caller's buffers.
    pub fn hint_path_into(&self, finder: &mut PathFinder, out: &mut Vec<Position>) {
        out.clear();
        if self.hint_visible {
            finder.find_into(&self.grid, self.player, self.goal, out);
        }
    }

    /// Apply a front-end action. Returns true if the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.attempt_move(direction).is_accepted(),
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::ToggleHint => {
                self.toggle_hint();
                true
            }
            GameAction::ToggleHelp => false,
        }
    }

    /// Fill `out` with the current session view.
    pub fn snapshot_with(&self, finder: &mut PathFinder, out: &mut GameSnapshot) {
        out.player = self.player;
        out.start = self.start;
        out.goal = self.goal;
        out.status = self.status;
        out.hint_visible = self.hint_visible;
        out.moves = self.moves;
        self.hint_path_into(finder, &mut out.hint);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.snapshot_with(&mut PathFinder::new(), out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
