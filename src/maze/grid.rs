use std::collections::VecDeque;

use super::cell::{Cell, Direction};
use super::{Position, WallCandidate};
use crate::error::MazeError;

/// Rectangular maze grid stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[Cell]>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Creates a `rows` x `cols` grid where every cell has all four walls.
    pub fn create_empty(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyDimensions { rows, cols });
        }
        Ok(Grid {
            cells: vec![Cell::WALLED; rows * cols].into_boxed_slice(),
            rows,
            cols,
        })
    }

    /// Builds a grid from externally supplied rows of cells.
    ///
    /// The input must be rectangular, closed along the outer boundary and agree on
    /// both sides of every internal wall.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyDimensions {
                rows: height,
                cols: width,
            });
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MazeError::NotRectangular {
                row,
                len: cells.len(),
                expected: width,
            });
        }

        let grid = Grid {
            cells: rows.into_iter().flatten().collect(),
            rows: height,
            cols: width,
        };
        for position in grid.positions() {
            for direction in Direction::ALL {
                let has_wall = grid[position].has_wall(direction);
                match grid.neighbor(position, direction) {
                    None if !has_wall => {
                        return Err(MazeError::OpenBoundary {
                            position,
                            direction,
                        });
                    }
                    Some(next) if grid[next].has_wall(direction.opposite()) != has_wall => {
                        return Err(MazeError::AsymmetricWall {
                            position,
                            direction,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: grids are created with positive dimensions.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Fails with [`MazeError::DimensionMismatch`] unless the grid is `rows` x `cols`.
    pub fn check_dimensions(&self, rows: usize, cols: usize) -> Result<(), MazeError> {
        if self.rows != rows || self.cols != cols {
            return Err(MazeError::DimensionMismatch {
                expected_rows: rows,
                expected_cols: cols,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn is_in_bounds(&self, position: Position) -> bool {
        position.0 < self.rows && position.1 < self.cols
    }

    /// Row-major id of a cell, `row * cols + col`.
    pub fn index_of(&self, position: Position) -> usize {
        position.0 * self.cols + position.1
    }

    pub fn position_of(&self, index: usize) -> Position {
        (index / self.cols, index % self.cols)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    /// The adjacent cell on the given side, if it lies inside the grid.
    pub fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = position.0.checked_add_signed(dr)?;
        let col = position.1.checked_add_signed(dc)?;
        self.is_in_bounds((row, col)).then_some((row, col))
    }

    /// Removable-wall record between `position` and its neighbor on `direction`.
    pub fn wall_candidate(
        &self,
        position: Position,
        direction: Direction,
    ) -> Option<WallCandidate> {
        self.neighbor(position, direction).map(|(nr, nc)| WallCandidate {
            row: position.0,
            col: position.1,
            direction,
            neighbor_row: nr,
            neighbor_col: nc,
        })
    }

    pub fn has_wall(&self, position: Position, direction: Direction) -> bool {
        self[position].has_wall(direction)
    }

    /// Neighbors reachable from `position` without crossing a wall.
    pub fn open_neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        self[position]
            .open_directions()
            .filter_map(move |dir| self.neighbor(position, dir))
    }

    /// Removes the wall on `direction` of `(row, col)` together with the matching wall of
    /// the neighbor. Returns `false` if the wall was already gone.
    ///
    /// # Panics
    /// If `(row, col)` is out of bounds or has no neighbor on `direction`.
    pub fn remove_wall(&mut self, row: usize, col: usize, direction: Direction) -> bool {
        let from = (row, col);
        if !self.is_in_bounds(from) {
            panic!("The given coordinate {:?} is out of bounds", from);
        }
        let Some(to) = self.neighbor(from, direction) else {
            panic!("Cannot remove the {} wall of {:?} on the maze boundary", direction, from);
        };
        let (from_idx, to_idx) = (self.index_of(from), self.index_of(to));
        let removed = self.cells[from_idx].clear(direction);
        self.cells[to_idx].clear(direction.opposite());
        removed
    }

    /// Whether every cell still has all four walls.
    pub fn is_fully_walled(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_fully_walled())
    }

    /// First cell that is not fully walled, used to reject reused grids.
    pub fn check_fully_walled(&self) -> Result<(), MazeError> {
        match self.cells.iter().position(|cell| !cell.is_fully_walled()) {
            Some(idx) => Err(MazeError::NotFullyWalled(self.position_of(idx))),
            None => Ok(()),
        }
    }

    /// Number of internal walls that have been removed.
    pub fn open_edge_count(&self) -> usize {
        self.positions()
            .map(|pos| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&dir| self.neighbor(pos, dir).is_some() && !self.has_wall(pos, dir))
                    .count()
            })
            .sum()
    }

    /// Number of cells reachable from `start`, including `start` itself.
    pub fn reachable_count(&self, start: Position) -> usize {
        let mut seen = vec![false; self.len()];
        let mut queue = VecDeque::from([start]);
        seen[self.index_of(start)] = true;
        let mut count = 0;
        while let Some(pos) = queue.pop_front() {
            count += 1;
            for next in self.open_neighbors(pos) {
                let idx = self.index_of(next);
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    /// Detects a cycle in the open-wall graph by walking every component and looking
    /// for an already-seen cell that is not the one we came from.
    pub fn has_cycle(&self) -> bool {
        let mut seen = vec![false; self.len()];
        for root in self.positions() {
            if seen[self.index_of(root)] {
                continue;
            }
            seen[self.index_of(root)] = true;
            let mut stack: Vec<(Position, Option<Position>)> = vec![(root, None)];
            while let Some((pos, came_from)) = stack.pop() {
                for next in self.open_neighbors(pos) {
                    if Some(next) == came_from {
                        continue;
                    }
                    let idx = self.index_of(next);
                    if seen[idx] {
                        return true;
                    }
                    seen[idx] = true;
                    stack.push((next, Some(pos)));
                }
            }
        }
        false
    }

    /// Connected and acyclic: exactly one route between every pair of cells.
    pub fn is_perfect(&self) -> bool {
        self.open_edge_count() == self.len() - 1
            && self.reachable_count((0, 0)) == self.len()
            && !self.has_cycle()
    }

    /// Whether both sides of every internal wall agree.
    pub fn walls_symmetric(&self) -> bool {
        self.positions().all(|pos| {
            Direction::ALL.into_iter().all(|dir| match self.neighbor(pos, dir) {
                Some(next) => self.has_wall(pos, dir) == self.has_wall(next, dir.opposite()),
                None => true,
            })
        })
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_empty() {
        let grid = Grid::create_empty(3, 4).unwrap();
        assert_eq!((grid.rows(), grid.cols(), grid.len()), (3, 4, 12));
        assert!(grid.is_fully_walled());
        assert_eq!(grid.open_edge_count(), 0);
        assert_eq!(
            Grid::create_empty(0, 4),
            Err(MazeError::EmptyDimensions { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn test_remove_wall_is_symmetric() {
        let mut grid = Grid::create_empty(3, 3).unwrap();
        assert!(grid.remove_wall(1, 1, Direction::Right));
        assert!(!grid.has_wall((1, 1), Direction::Right));
        assert!(!grid.has_wall((1, 2), Direction::Left));
        // Removing the same wall from the other side is a no-op
        assert!(!grid.remove_wall(1, 2, Direction::Left));
        assert!(grid.remove_wall(1, 1, Direction::Top));
        assert!(!grid.has_wall((0, 1), Direction::Bottom));
        assert!(grid.walls_symmetric());
        assert_eq!(grid.open_edge_count(), 2);
    }

    #[test]
    #[should_panic(expected = "on the maze boundary")]
    fn test_remove_boundary_wall_panics() {
        let mut grid = Grid::create_empty(2, 2).unwrap();
        grid.remove_wall(0, 1, Direction::Right);
    }

    #[test]
    fn test_neighbors_and_bounds() {
        let grid = Grid::create_empty(2, 3).unwrap();
        assert_eq!(grid.neighbor((0, 0), Direction::Top), None);
        assert_eq!(grid.neighbor((0, 0), Direction::Left), None);
        assert_eq!(grid.neighbor((0, 0), Direction::Right), Some((0, 1)));
        assert_eq!(grid.neighbor((1, 2), Direction::Bottom), None);
        assert_eq!(grid.neighbor((1, 2), Direction::Top), Some((0, 2)));
        assert!(!grid.is_in_bounds((2, 0)));
        assert_eq!(grid.index_of((1, 2)), 5);
        assert_eq!(grid.position_of(5), (1, 2));
    }

    #[test]
    fn test_cycle_and_perfect_checks() {
        let mut grid = Grid::create_empty(2, 2).unwrap();
        grid.remove_wall(0, 0, Direction::Right);
        grid.remove_wall(0, 1, Direction::Bottom);
        assert!(!grid.is_perfect());
        grid.remove_wall(1, 0, Direction::Right);
        assert!(grid.is_perfect());
        grid.remove_wall(0, 0, Direction::Bottom);
        assert!(grid.has_cycle());
        assert!(!grid.is_perfect());
    }

    #[test]
    fn test_from_rows_validation() {
        let walled = || vec![vec![Cell::WALLED; 2]; 2];
        assert!(Grid::from_rows(walled()).is_ok());

        let mut ragged = walled();
        ragged[1].pop();
        assert_eq!(
            Grid::from_rows(ragged),
            Err(MazeError::NotRectangular {
                row: 1,
                len: 1,
                expected: 2
            })
        );

        let mut one_sided = walled();
        one_sided[0][0] = Cell::from_walls(true, false, true, true);
        assert_eq!(
            Grid::from_rows(one_sided),
            Err(MazeError::AsymmetricWall {
                position: (0, 0),
                direction: Direction::Right
            })
        );

        let mut leaky = walled();
        leaky[0][0] = Cell::from_walls(false, true, true, true);
        assert_eq!(
            Grid::from_rows(leaky),
            Err(MazeError::OpenBoundary {
                position: (0, 0),
                direction: Direction::Top
            })
        );
    }

    #[test]
    fn test_check_fully_walled() {
        let mut grid = Grid::create_empty(2, 2).unwrap();
        assert!(grid.check_fully_walled().is_ok());
        grid.remove_wall(1, 0, Direction::Right);
        assert_eq!(grid.check_fully_walled(), Err(MazeError::NotFullyWalled((1, 0))));
    }
}
