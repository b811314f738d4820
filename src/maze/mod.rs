pub mod cell;
pub mod grid;
pub mod render;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cell::Cell;
pub use grid::Grid;

/// Errors raised when building a grid or validating maze dimensions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions must be odd and at least 5, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid of {width}x{height} cells exceeds the {max}x{max} limit")]
    GridTooLarge { width: usize, height: usize, max: u16 },
}

/// A (row, col) position in a grid, 0-indexed from the top left corner.
///
/// On the wire a coordinate is a two element array `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(u16, u16)", into = "(u16, u16)")]
pub struct Coord {
    pub row: u16,
    pub col: u16,
}

impl Coord {
    pub const fn new(row: u16, col: u16) -> Self {
        Coord { row, col }
    }

    /// Moves `distance` cells in `direction`.
    /// Returns `None` if the move would underflow or overflow the coordinate space;
    /// the caller still has to check the result against the grid bounds.
    pub fn step(self, direction: Direction, distance: u16) -> Option<Coord> {
        let Coord { row, col } = self;
        let moved = match direction {
            Direction::Right => Coord::new(row, col.checked_add(distance)?),
            Direction::Left => Coord::new(row, col.checked_sub(distance)?),
            Direction::Down => Coord::new(row.checked_add(distance)?, col),
            Direction::Up => Coord::new(row.checked_sub(distance)?, col),
        };
        Some(moved)
    }

    /// The cell halfway between two coordinates on the same row or column.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord::new(
            self.row.min(other.row) + self.row.abs_diff(other.row) / 2,
            self.col.min(other.col) + self.col.abs_diff(other.col) / 2,
        )
    }

    /// Whether `other` is one of the four orthogonal neighbors of this coordinate.
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(u16, u16)> for Coord {
    fn from((row, col): (u16, u16)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (u16, u16) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

/// The four axis directions of a 4-connected grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// Fixed neighbor order used by the generator and by both solvers.
    /// Changing it changes which of several equally short paths BFS returns
    /// and which path DFS follows.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];
}

/// Validated maze dimensions: both sides odd and at least [`Dimensions::MIN_SIDE`].
///
/// Odd sides give the generator a lattice of rooms at odd (row, col) positions
/// separated by single wall cells, with the goal room at `(height - 2, width - 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    pub const MIN_SIDE: u16 = 5;

    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if is_valid_side(width) && is_valid_side(height) {
            Ok(Dimensions { width, height })
        } else {
            Err(MazeError::InvalidDimensions { width, height })
        }
    }

    /// Const constructor for statically known dimensions.
    ///
    /// # Panics
    /// If either side is even or smaller than [`Dimensions::MIN_SIDE`]. In a `static`
    /// or `const` context this is a compile error.
    pub const fn from_odd(width: u16, height: u16) -> Self {
        assert!(
            is_valid_side(width) && is_valid_side(height),
            "maze dimensions must be odd and at least 5"
        );
        Dimensions { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The start room, always the top left room.
    pub fn start(&self) -> Coord {
        Coord::new(1, 1)
    }

    /// The goal room, always the bottom right room.
    pub fn goal(&self) -> Coord {
        Coord::new(self.height - 2, self.width - 2)
    }

    /// Number of rooms (odd row, odd col cells) in the lattice.
    pub fn room_count(&self) -> usize {
        ((self.width as usize - 1) / 2) * ((self.height as usize - 1) / 2)
    }
}

const fn is_valid_side(side: u16) -> bool {
    side >= Dimensions::MIN_SIDE && side % 2 == 1
}
