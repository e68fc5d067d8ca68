use std::ops::ControlFlow;

use super::{GenerationStatus, RandomSource, StepSink, check_fresh, sink::Carver};
use crate::{
    error::MazeError,
    maze::{Direction, Grid, Position, WallCandidate},
};

/// Iterative depth-first carving from the top-left cell.
pub fn generate_backtracking<R, S>(
    grid: &mut Grid,
    rows: usize,
    cols: usize,
    rng: &mut R,
    sink: &mut S,
) -> Result<GenerationStatus, MazeError>
where
    R: RandomSource + ?Sized,
    S: StepSink + ?Sized,
{
    check_fresh(grid, rows, cols)?;

    let mut visited = vec![false; rows * cols];
    let start: Position = (0, 0);
    visited[grid.index_of(start)] = true;

    // The stack holds the current carving path; its top is the cell being extended
    let mut stack = vec![start];
    let mut carver = Carver::new(grid, sink);
    let mut flow = ControlFlow::Continue(());
    while let Some(&cell) = stack.last() {
        let unvisited = Direction::ALL
            .into_iter()
            .filter_map(|dir| carver.grid.wall_candidate(cell, dir))
            .filter(|wall| !visited[carver.grid.index_of(wall.to())])
            .collect::<Vec<WallCandidate>>();

        let Some(&wall) = rng.choose(&unvisited) else {
            // Dead end, backtrack
            stack.pop();
            continue;
        };
        visited[carver.grid.index_of(wall.to())] = true;
        stack.push(wall.to());
        flow = carver.carve(wall);
        if flow.is_break() {
            break;
        }
    }
    Ok(carver.finish(flow))
}
