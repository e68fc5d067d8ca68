use std::cmp::Reverse;

use super::{PathResult, reconstruct_path};
use crate::{
    error::MazeError,
    maze::{Grid, Position},
    structures::PriorityQueue,
};

fn manhattan(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// A* search from `(0, 0)` with the Manhattan distance to the goal as heuristic.
///
/// Entries are ordered by `f = g + h`, deeper entries first among equal `f`. Improving a
/// cell pushes a new entry; an entry whose `g` is no longer the cell's best is dropped
/// when it comes out and is not counted as visited.
pub fn find_path_astar(grid: &Grid, rows: usize, cols: usize) -> Result<PathResult, MazeError> {
    grid.check_dimensions(rows, cols)?;

    let goal = grid.len() - 1;
    let goal_pos = grid.position_of(goal);
    let heuristic = |idx: usize| manhattan(grid.position_of(idx), goal_pos);

    let mut best_g = vec![usize::MAX; grid.len()];
    let mut closed = vec![false; grid.len()];
    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut open: PriorityQueue<(usize, usize), (usize, Reverse<usize>)> = PriorityQueue::new();
    best_g[0] = 0;
    open.enqueue((0, 0), (heuristic(0), Reverse(0)));

    let mut visited_count = 0;
    let mut goal_reached = false;
    while let Some((current, g)) = open.dequeue() {
        if closed[current] || g != best_g[current] {
            continue; // Stale entry
        }
        closed[current] = true;
        visited_count += 1;
        if current == goal {
            goal_reached = true;
            break;
        }

        let tentative_g = g + 1;
        for next in grid.open_neighbors(grid.position_of(current)) {
            let idx = grid.index_of(next);
            if tentative_g < best_g[idx] {
                best_g[idx] = tentative_g;
                parent[idx] = Some(current);
                open.enqueue(
                    (idx, tentative_g),
                    (tentative_g + heuristic(idx), Reverse(tentative_g)),
                );
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
    use crate::{maze::Direction, solvers::find_path_bfs};

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan((0, 0), (3, 4)), 7);
        assert_eq!(manhattan((5, 1), (2, 6)), 8);
        assert_eq!(manhattan((2, 2), (2, 2)), 0);
    }

    #[test]
    fn test_heuristic_prunes_open_grid() {
        let mut grid = Grid::create_empty(3, 3).unwrap();
        for row in 0..3 {
            for col in 0..3 {
                if col + 1 < 3 {
                    grid.remove_wall(row, col, Direction::Right);
                }
                if row + 1 < 3 {
                    grid.remove_wall(row, col, Direction::Bottom);
                }
            }
        }
        let astar = find_path_astar(&grid, 3, 3).unwrap();
        let bfs = find_path_bfs(&grid, 3, 3).unwrap();
        assert_eq!(astar.path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!(astar.visited_count, 5);
        assert_eq!(bfs.visited_count, 9);
    }

    #[test]
    fn test_detour_is_still_optimal() {
        // Serpentine corridor: the heuristic points straight down but the only route winds
        let mut grid = Grid::create_empty(3, 3).unwrap();
        grid.remove_wall(0, 0, Direction::Right);
        grid.remove_wall(0, 1, Direction::Right);
        grid.remove_wall(0, 2, Direction::Bottom);
        grid.remove_wall(1, 2, Direction::Left);
        grid.remove_wall(1, 1, Direction::Left);
        grid.remove_wall(1, 0, Direction::Bottom);
        grid.remove_wall(2, 0, Direction::Right);
        grid.remove_wall(2, 1, Direction::Right);
        let result = find_path_astar(&grid, 3, 3).unwrap();
        assert_eq!(result.path.len(), 9);
        assert_eq!(result.visited_count, 9);
    }
}
