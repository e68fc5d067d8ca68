use super::{PathResult, reconstruct_path};
use crate::{error::MazeError, maze::Grid};

/// Depth-first search from `(0, 0)`.
///
/// Cells are marked when pushed, so each one is popped at most once. The path found is
/// a valid route but not necessarily the shortest.
pub fn find_path_dfs(grid: &Grid, rows: usize, cols: usize) -> Result<PathResult, MazeError> {
    grid.check_dimensions(rows, cols)?;

    let goal = grid.len() - 1;
    let mut discovered = vec![false; grid.len()];
    let mut parent: Vec<Option<usize>> = vec![None; grid.len()];
    let mut stack = vec![0];
    discovered[0] = true;

    let mut visited_count = 0;
    let mut goal_reached = false;
    while let Some(current) = stack.pop() {
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
                stack.push(idx);
            }
        }
    }

    Ok(PathResult {
        path: reconstruct_path(grid, &parent, goal_reached),
        visited_count,
    })
}
