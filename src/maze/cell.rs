use std::fmt;

/// One of the four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions in exploration order. Every generator and pathfinder walks
    /// neighbors in this order, so changing it changes their output.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// Row and column delta of the neighbor on this side.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Top => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Bottom => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Top => 0b0001,
            Direction::Right => 0b0010,
            Direction::Bottom => 0b0100,
            Direction::Left => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
        };
        write!(f, "{}", name)
    }
}

/// Wall bitmask of a single maze cell.
///
/// Cells are only mutated through [`Grid::remove_wall`](super::Grid::remove_wall) so that
/// both sides of a wall always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All four walls present.
    pub const WALLED: Cell = Cell(0b1111);
    /// No walls at all.
    pub const OPEN: Cell = Cell(0);

    /// Builds a cell from individual wall flags.
    pub fn from_walls(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        [top, right, bottom, left]
            .into_iter()
            .zip(Direction::ALL)
            .filter(|&(present, _)| present)
            .fold(Cell::OPEN, |cell, (_, dir)| Cell(cell.0 | dir.bit()))
    }

    pub fn has_wall(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_fully_walled(self) -> bool {
        self == Cell::WALLED
    }

    /// Sides without a wall, in [`Direction::ALL`] order.
    pub fn open_directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| !self.has_wall(dir))
    }

    pub(super) fn clear(&mut self, direction: Direction) -> bool {
        let had_wall = self.has_wall(direction);
        self.0 &= !direction.bit();
        had_wall
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_from_walls() {
        let cell = Cell::from_walls(true, false, true, false);
        assert!(cell.has_wall(Direction::Top));
        assert!(!cell.has_wall(Direction::Right));
        assert!(cell.has_wall(Direction::Bottom));
        assert!(!cell.has_wall(Direction::Left));
        assert_eq!(cell, Cell(0b0101));
        assert_eq!(
            cell.open_directions().collect::<Vec<_>>(),
            vec![Direction::Right, Direction::Left]
        );
        assert_eq!(Cell::from_walls(true, true, true, true), Cell::WALLED);
    }

    #[test]
    fn test_clear_reports_previous_state() {
        let mut cell = Cell::WALLED;
        assert!(cell.clear(Direction::Left));
        assert!(!cell.clear(Direction::Left));
        assert!(!cell.is_fully_walled());
    }
}
