pub mod cell;
mod grid;

pub use cell::{Cell, Direction};
pub use grid::Grid;

/// Cell coordinate as `(row, col)`, both 0-indexed.
pub type Position = (usize, usize);

/// One removable wall between two adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallCandidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub neighbor_row: usize,
    pub neighbor_col: usize,
}

impl WallCandidate {
    pub fn from(&self) -> Position {
        (self.row, self.col)
    }

    pub fn to(&self) -> Position {
        (self.neighbor_row, self.neighbor_col)
    }
}

/// A single generation step: the wall that was removed and the grid right after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub wall: WallCandidate,
    pub snapshot: Grid,
}
