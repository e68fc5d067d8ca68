use std::ops::ControlFlow;

use super::{GenerationStatus, RandomSource, StepSink, check_fresh, sink::Carver};
use crate::{
    error::MazeError,
    maze::{Direction, Grid, Position, WallCandidate},
};

/// Walls from `pos` towards neighbors outside the visited region.
fn frontier_walls(grid: &Grid, visited: &[bool], pos: Position) -> Vec<WallCandidate> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| grid.wall_candidate(pos, dir))
        .filter(|wall| !visited[grid.index_of(wall.to())])
        .collect()
}

/// Randomized Prim: grow the maze from a random cell by repeatedly opening a random
/// frontier wall whose far side has not been reached yet.
pub fn generate_prim<R, S>(
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
    let start: Position = (rng.below(rows), rng.below(cols));
    visited[grid.index_of(start)] = true;

    // The same cell can be behind several frontier walls; stale ones are skipped when picked
    let mut frontier = frontier_walls(grid, &visited, start);
    let mut carver = Carver::new(grid, sink);
    let mut flow = ControlFlow::Continue(());
    while !frontier.is_empty() {
        let wall = frontier.swap_remove(rng.below(frontier.len()));
        let target = carver.grid.index_of(wall.to());
        if visited[target] {
            continue;
        }
        visited[target] = true;
        flow = carver.carve(wall);
        if flow.is_break() {
            break;
        }
        frontier.extend(frontier_walls(carver.grid, &visited, wall.to()));
    }
    Ok(carver.finish(flow))
}
