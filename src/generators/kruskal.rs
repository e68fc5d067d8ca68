use std::ops::ControlFlow;

use super::{GenerationStatus, RandomSource, StepSink, check_fresh, sink::Carver};
use crate::{
    error::MazeError,
    maze::{Direction, Grid, WallCandidate},
    structures::DisjointSet,
};

/// Randomized Kruskal: scan every internal wall in shuffled order and knock it down
/// whenever it separates two cells that are not yet connected.
pub fn generate_kruskal<R, S>(
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

    // Only right and bottom walls, so every internal wall appears once
    let walled: &Grid = grid;
    let mut walls: Vec<WallCandidate> = walled
        .positions()
        .flat_map(|pos| {
            [Direction::Right, Direction::Bottom]
                .into_iter()
                .filter_map(move |dir| walled.wall_candidate(pos, dir))
        })
        .collect();
    rng.shuffle(&mut walls);

    let mut sets = DisjointSet::new(rows * cols);
    let mut carver = Carver::new(grid, sink);
    let flow = walls.into_iter().try_for_each(|wall| {
        let here = wall.row * cols + wall.col;
        let there = wall.neighbor_row * cols + wall.neighbor_col;
        if sets.union(here, there) {
            carver.carve(wall)
        } else {
            ControlFlow::Continue(())
        }
    });
    Ok(carver.finish(flow))
}
