mod backtracking;
mod eller;
mod kruskal;
mod prim;
mod random;
mod sink;

pub use backtracking::generate_backtracking;
pub use eller::generate_eller;
pub use kruskal::generate_kruskal;
pub use prim::generate_prim;
pub use random::{RandomSource, ScriptedRandom, get_rng};
pub use sink::{GenerationStatus, NoopSink, SnapshotRecorder, StepSink};

use crate::{error::MazeError, maze::Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    Kruskal,
    Prim,
    Backtracking,
    Eller,
}

impl Generator {
    pub const ALL: [Generator; 4] = [
        Generator::Kruskal,
        Generator::Prim,
        Generator::Backtracking,
        Generator::Eller,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Backtracking => write!(f, "Recursive Backtracking"),
            Generator::Eller => write!(f, "Eller's Algorithm"),
        }
    }
}

/// Carves a perfect maze into a freshly walled `grid` with the selected algorithm.
pub fn generate_maze<R, S>(
    grid: &mut Grid,
    generator: Generator,
    rng: &mut R,
    sink: &mut S,
) -> Result<GenerationStatus, MazeError>
where
    R: RandomSource + ?Sized,
    S: StepSink + ?Sized,
{
    let (rows, cols) = (grid.rows(), grid.cols());
    let status = match generator {
        Generator::Kruskal => generate_kruskal(grid, rows, cols, rng, sink),
        Generator::Prim => generate_prim(grid, rows, cols, rng, sink),
        Generator::Backtracking => generate_backtracking(grid, rows, cols, rng, sink),
        Generator::Eller => generate_eller(grid, rows, cols, rng, sink),
    }?;
    tracing::debug!(
        "[generate] {} finished on {}x{} grid: {:?}",
        generator,
        rows,
        cols,
        status
    );
    Ok(status)
}

/// Shared entry checks: matching dimensions and an untouched grid.
fn check_fresh(grid: &Grid, rows: usize, cols: usize) -> Result<(), MazeError> {
    grid.check_dimensions(rows, cols)?;
    grid.check_fully_walled()
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use super::*;
    use crate::maze::{Direction, WallCandidate};

    #[test]
    fn test_every_generator_builds_perfect_maze() {
        for generator in Generator::ALL {
            for seed in 0..8 {
                let mut grid = Grid::create_empty(9, 13).unwrap();
                let mut rng = get_rng(Some(seed));
                let status = generate_maze(&mut grid, generator, &mut rng, &mut NoopSink).unwrap();
                assert_eq!(
                    status,
                    GenerationStatus::Completed {
                        walls_removed: 9 * 13 - 1
                    },
                    "{} with seed {}",
                    generator,
                    seed
                );
                assert!(grid.is_perfect(), "{} with seed {}", generator, seed);
            }
        }
    }

    #[test]
    fn test_rejects_used_or_mismatched_grid() {
        let mut rng = get_rng(Some(1));
        let mut grid = Grid::create_empty(3, 3).unwrap();
        assert!(matches!(
            generate_kruskal(&mut grid, 3, 4, &mut rng, &mut NoopSink),
            Err(MazeError::DimensionMismatch { .. })
        ));
        grid.remove_wall(2, 2, Direction::Top);
        for generator in Generator::ALL {
            assert_eq!(
                generate_maze(&mut grid, generator, &mut rng, &mut NoopSink),
                Err(MazeError::NotFullyWalled((1, 2)))
            );
        }
    }

    #[test]
    fn test_abandoned_run_keeps_removed_walls() {
        for generator in Generator::ALL {
            let mut grid = Grid::create_empty(6, 6).unwrap();
            let mut rng = get_rng(Some(3));
            let mut seen = 0;
            let mut stop_after_five = |_: &Grid, _: WallCandidate| {
                seen += 1;
                if seen == 5 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            };
            let status =
                generate_maze(&mut grid, generator, &mut rng, &mut stop_after_five).unwrap();
            assert_eq!(status, GenerationStatus::Abandoned { walls_removed: 5 });
            assert!(!status.is_completed());
            assert_eq!(grid.open_edge_count(), 5);
            assert!(grid.walls_symmetric());
        }
    }

    #[test]
    fn test_same_seed_same_wall_order() {
        for generator in Generator::ALL {
            let run = || {
                let mut grid = Grid::create_empty(7, 5).unwrap();
                let mut recorder = SnapshotRecorder::new();
                generate_maze(&mut grid, generator, &mut get_rng(Some(11)), &mut recorder).unwrap();
                recorder.walls()
            };
            assert_eq!(run(), run(), "{}", generator);
        }
    }
}
