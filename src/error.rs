use thiserror::Error;

use crate::maze::{Direction, Position};

/// Precondition violations raised by the maze core.
///
/// "No path to the goal" is not an error; pathfinders report it as an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("expected a {expected_rows}x{expected_cols} grid, got {rows}x{cols}")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    #[error("row {row} has {len} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell {position:?} has no {direction} wall on the maze boundary")]
    OpenBoundary {
        position: Position,
        direction: Direction,
    },

    #[error("cell {position:?} disagrees with its neighbor about the {direction} wall")]
    AsymmetricWall {
        position: Position,
        direction: Direction,
    },

    #[error("generation requires a fully walled grid, but cell {0:?} has open walls")]
    NotFullyWalled(Position),
}
