use std::collections::VecDeque;

use super::{PathResult, reconstruct_path};
use crate::{error::MazeError, maze::Grid};

/// Breadth-first search from `(0, 0)`. The returned path is a shortest one.
pub fn find_path_bfs(grid: &Grid, rows: usize, cols: usize) -> Result<PathResult, MazeError> {
    grid.check_dimensions(rows, cols)?;

    let goal = grid.len() - 1;
    let mut discovered = vec![false; grid.len()];
    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut queue = VecDeque::from([0]);
    discovered[0] = true;

    let mut visited_count = 0;
    let mut goal_reached = false;
    while let Some(current) = queue.pop_front() {
        visited_count += 1;
        if current == goal {
            goal_reached = true;
            break;
        }

        for next in grid.open_neighbors(grid.position_of(current)) {
            let idx = grid.index_of(next);
            if !discovered[idx] {
                discovered[idx] = true;
                parent[idx] = Some(current);
                queue.push_back(idx);
            }
        }
    }

    Ok(PathResult {
        path: reconstruct_path(grid, &parent, goal_reached),
        visited_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_ties_follow_direction_order() {
        // A loop gives two shortest routes, along the top row or along the bottom row
        let mut grid = Grid::create_empty(2, 3).unwrap();
        grid.remove_wall(0, 0, Direction::Right);
        grid.remove_wall(0, 1, Direction::Right);
        grid.remove_wall(0, 2, Direction::Bottom);
        grid.remove_wall(0, 0, Direction::Bottom);
        grid.remove_wall(1, 0, Direction::Right);
        grid.remove_wall(1, 1, Direction::Right);
        let result = find_path_bfs(&grid, 2, 3).unwrap();
        assert_eq!(result.path.len(), 4);
        // Right is explored before bottom, so the top route wins
        assert_eq!(result.path, vec![(0, 0), (0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_stops_when_goal_dequeued() {
        let mut grid = Grid::create_empty(1, 4).unwrap();
        for col in 0..3 {
            grid.remove_wall(0, col, Direction::Right);
        }
        let result = find_path_bfs(&grid, 1, 4).unwrap();
        assert_eq!(result.visited_count, 4);
        assert_eq!(result.path, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }
}
