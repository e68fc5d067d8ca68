mod astar;
mod bfs;
mod dfs;

pub use astar::find_path_astar;
pub use bfs::find_path_bfs;
pub use dfs::find_path_dfs;

use crate::{
    error::MazeError,
    maze::{Grid, Position},
};

/// Outcome of one path query from the top-left to the bottom-right cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResult {
    /// Cells from start to goal inclusive; empty when the goal is unreachable.
    pub path: Vec<Position>,
    /// Number of cells taken off the frontier.
    pub visited_count: usize,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Solver {
    Bfs,
    Dfs,
    #[value(name = "astar")]
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 3] = [Solver::Bfs, Solver::Dfs, Solver::AStar];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

pub fn solve_maze(grid: &Grid, solver: Solver) -> Result<PathResult, MazeError> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let result = match solver {
        Solver::Bfs => find_path_bfs(grid, rows, cols),
        Solver::Dfs => find_path_dfs(grid, rows, cols),
        Solver::AStar => find_path_astar(grid, rows, cols),
    }?;
    tracing::debug!(
        "[solve] {} visited {} cells, path length {}",
        solver,
        result.visited_count,
        result.path.len()
    );
    Ok(result)
}

/// Walks predecessor links back from the goal. Returns an empty path if the goal was
/// never reached.
fn reconstruct_path(grid: &Grid, parent: &[Option<usize>], goal_reached: bool) -> Vec<Position> {
    if !goal_reached {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut current = Some(grid.len() - 1);
    while let Some(idx) = current {
        path.push(grid.position_of(idx));
        current = parent[idx];
    }
    path.reverse();
    path
}
