//! Grid module - the immutable maze layout
//!
//! The grid is a W x H matrix of cell tags stored as a flat row-major array.
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). The grid never changes after construction; every method
//! here is a pure query.

use arrayvec::ArrayVec;

use crate::error::MazeError;
use crate::types::{CellType, Direction, Position};

/// The maze layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellType>,
}

impl Grid {
    /// Build a grid from rows of tags.
    ///
    /// Every row must have the same, non-zero number of columns.
    pub fn from_rows(rows: Vec<Vec<CellType>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend(line);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from ASCII rows (`#` wall, `.` path, `S` start, `E` end, `~` hazard).
    pub fn from_ascii<S: AsRef<str>>(lines: &[S]) -> Result<Self, MazeError> {
        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let parsed = line
                .as_ref()
                .chars()
                .enumerate()
                .map(|(column, glyph)| {
                    CellType::from_char(glyph).ok_or(MazeError::UnknownGlyph { row, column, glyph })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(parsed);
        }
        Self::from_rows(rows)
    }

    /// Flat index for an in-bounds position
    #[inline(always)]
    pub(crate) fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.y as usize) * self.width + (pos.x as usize))
    }

    /// Inverse of [`Grid::index`]
    #[inline(always)]
    pub(crate) fn position_of(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells (W * H)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Tag at `pos`, or `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<CellType> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Tag at `pos`
    pub fn cell_at(&self, pos: Position) -> Result<CellType, MazeError> {
        self.get(pos)
            .ok_or(MazeError::OutOfBounds { x: pos.x, y: pos.y })
    }

    /// Check if the player may occupy `pos` (in bounds and not a wall)
    pub fn is_enterable(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(tag) if tag.is_enterable())
    }

    /// Check if `pos` is an end cell
    pub fn is_goal(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellType::End)
    }

    /// The start cell (first in row-major order)
    pub fn find_start(&self) -> Result<Position, MazeError> {
        self.find_first(CellType::Start).ok_or(MazeError::MissingStart)
    }

    /// The goal cell (first end cell in row-major order)
    pub fn find_goal(&self) -> Result<Position, MazeError> {
        self.find_first(CellType::End).ok_or(MazeError::MissingGoal)
    }

    fn find_first(&self, tag: CellType) -> Option<Position> {
        self.cells
            .iter()
            .position(|&cell| cell == tag)
            .map(|idx| self.position_of(idx))
    }

    /// Number of cells carrying `tag`
    pub fn count(&self, tag: CellType) -> usize {
        self.cells.iter().filter(|&&cell| cell == tag).count()
    }

    /// Check the invariants a playable session needs: exactly one start and
    /// exactly one end.
    pub fn validate(&self) -> Result<(), MazeError> {
        match self.count(CellType::Start) {
            0 => return Err(MazeError::MissingStart),
            1 => {}
            count => return Err(MazeError::MultipleStarts { count }),
        }
        match self.count(CellType::End) {
            0 => Err(MazeError::MissingGoal),
            1 => Ok(()),
            count => Err(MazeError::MultipleGoals { count }),
        }
    }

    /// Enterable orthogonal neighbours of `pos` in up, right, down, left order
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        Direction::ALL
            .iter()
            .map(|&dir| pos + dir)
            .filter(|&next| self.is_enterable(next))
            .collect()
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellType]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Render back to the ASCII layout format, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(CellType::as_char));
            out.push('\n');
        }
        out
    }
}
