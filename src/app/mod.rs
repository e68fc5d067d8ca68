pub mod renderer;
pub mod stream;

use std::{
    fmt,
    time::{Duration, Instant},
};

use crate::{
    error::MazeError,
    generators::{GenerationStatus, Generator, NoopSink, generate_maze, get_rng},
    maze::Grid,
    solvers::{PathResult, Solver, solve_maze},
};
use renderer::Renderer;
use stream::SnapshotStream;

/// Timings and counts of one generate + solve run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub generation_time: Duration,
    pub pathfinding_time: Duration,
    /// Number of cells on the path, start and goal included
    pub path_length: usize,
    pub visited_cells: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation: {:.0}ms | Pathfinding: {:.0}ms | Path length: {} cells | Visited: {}",
            self.generation_time.as_secs_f64() * 1000.0,
            self.pathfinding_time.as_secs_f64() * 1000.0,
            self.path_length,
            self.visited_cells
        )
    }
}

/// Everything produced by [`App::compute`].
#[derive(Debug, Clone)]
pub struct Run {
    pub grid: Grid,
    pub status: GenerationStatus,
    pub result: PathResult,
    pub stats: Stats,
}

#[derive(Debug, Clone)]
pub struct App {
    /// Number of maze rows
    pub rows: usize,
    /// Number of maze columns
    pub cols: usize,
    pub generator: Generator,
    pub solver: Solver,
    /// Seed for reproducible mazes; a fresh OS seed is used when absent
    pub seed: Option<u64>,
    /// Animation speed from 1 (slowest) to 100 (no delay)
    pub animation_speed: u8,
    /// Whether to draw every generation step and reveal the path cell by cell
    pub animate: bool,
    /// Draw with ASCII characters instead of styled glyphs
    pub plain: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 20,
            generator: Generator::Kruskal,
            solver: Solver::Bfs,
            seed: None,
            animation_speed: 50,
            animate: true,
            plain: false,
        }
    }
}

impl App {
    /// Row counts accepted by the front end
    pub const ROW_RANGE: (usize, usize) = (5, 30);
    /// Column counts accepted by the front end
    pub const COL_RANGE: (usize, usize) = (5, 40);
    /// Maximum number of generation steps buffered between the worker and the renderer
    const MAX_STEPS_IN_CHANNEL_BUFFER: usize = 16;

    /// Clamps dimensions and speed into the ranges the front end supports.
    pub fn clamped(mut self) -> Self {
        self.rows = self.rows.clamp(Self::ROW_RANGE.0, Self::ROW_RANGE.1);
        self.cols = self.cols.clamp(Self::COL_RANGE.0, Self::COL_RANGE.1);
        self.animation_speed = self.animation_speed.clamp(1, 100);
        self
    }

    /// Pause between two animation frames. Full speed means no pause at all.
    pub fn step_delay(&self) -> Duration {
        if self.animation_speed < 100 {
            Duration::from_millis(110u64.saturating_sub(self.animation_speed as u64).max(1))
        } else {
            Duration::ZERO
        }
    }

    /// Generate and solve the maze without drawing anything.
    pub fn compute(&self) -> Result<Run, MazeError> {
        let mut grid = Grid::create_empty(self.rows, self.cols)?;
        let mut rng = get_rng(self.seed);

        let started = Instant::now();
        let status = generate_maze(&mut grid, self.generator, &mut rng, &mut NoopSink)?;
        let generation_time = started.elapsed();

        let (result, pathfinding_time) = self.solve(&grid)?;
        Ok(Run {
            stats: Stats {
                generation_time,
                pathfinding_time,
                path_length: result.path.len(),
                visited_cells: result.visited_count,
            },
            grid,
            status,
            result,
        })
    }

    fn solve(&self, grid: &Grid) -> Result<(PathResult, Duration), MazeError> {
        let started = Instant::now();
        let result = solve_maze(grid, self.solver)?;
        Ok((result, started.elapsed()))
    }

    /// Generate, solve and draw the maze, then print the run statistics.
    pub fn run(&self) -> Result<Stats, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!(
            "[app] {}x{} maze, generator: {}, solver: {}, seed: {:?}",
            self.rows,
            self.cols,
            self.generator,
            self.solver,
            self.seed
        );
        let mut renderer = Renderer::new(self.plain);

        let (grid, generation_time) = if self.animate {
            self.animate_generation(&mut renderer)?
        } else {
            let run = self.compute()?;
            (run.grid, run.stats.generation_time)
        };

        let (result, pathfinding_time) = self.solve(&grid)?;
        if self.animate {
            // Reveal the path one cell at a time
            for len in 0..result.path.len() {
                renderer.draw(&grid, &result.path[..len])?;
                std::thread::sleep(self.step_delay());
            }
        }
        renderer.draw(&grid, &result.path)?;
        renderer.finish()?;

        let stats = Stats {
            generation_time,
            pathfinding_time,
            path_length: result.path.len(),
            visited_cells: result.visited_count,
        };
        let verdict = if result.is_found() {
            "Path found!"
        } else {
            "No path found."
        };
        renderer.print_line(&format!("{} {}", verdict, stats))?;
        tracing::info!("[app] finished: {}", stats);
        Ok(stats)
    }

    /// Draws every generation step as it arrives from the worker.
    fn animate_generation(
        &self,
        renderer: &mut Renderer,
    ) -> Result<(Grid, Duration), Box<dyn std::error::Error + Send + Sync>> {
        let started = Instant::now();
        let mut stream = SnapshotStream::spawn(
            self.rows,
            self.cols,
            self.generator,
            self.seed,
            Self::MAX_STEPS_IN_CHANNEL_BUFFER,
        )?;
        renderer.draw(&Grid::create_empty(self.rows, self.cols)?, &[])?;
        for step in stream.by_ref() {
            renderer.draw(&step.snapshot, &[])?;
            std::thread::sleep(self.step_delay());
        }
        let (grid, status) = stream.finish()?;
        tracing::debug!("[app] animated generation ended: {:?}", status);
        Ok((grid, started.elapsed()))
    }

    /// Profiling mode: run generate + solve repeatedly without rendering and report the
    /// mean timings.
    pub fn profile(&self, num_iterations: Option<usize>) -> Result<Stats, MazeError> {
        let iterations = num_iterations.unwrap_or(1).max(1);
        let mut total = Stats::default();
        for i in 0..iterations {
            // Distinct but reproducible seeds per iteration when a base seed is set
            let app = App {
                seed: self.seed.map(|seed| seed.wrapping_add(i as u64)),
                ..self.clone()
            };
            let run = app.compute()?;
            total.generation_time += run.stats.generation_time;
            total.pathfinding_time += run.stats.pathfinding_time;
            total.path_length += run.stats.path_length;
            total.visited_cells += run.stats.visited_cells;
        }
        let n = iterations as u32;
        let mean = Stats {
            generation_time: total.generation_time / n,
            pathfinding_time: total.pathfinding_time / n,
            path_length: total.path_length / iterations,
            visited_cells: total.visited_cells / iterations,
        };
        tracing::info!("[profile] {} iterations, mean: {}", iterations, mean);
        Ok(mean)
    }
}
