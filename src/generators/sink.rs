use std::{ops::ControlFlow, sync::mpsc::SyncSender};

use crate::maze::{Grid, Step, WallCandidate};

/// Receives the grid after every wall removal, in removal order.
///
/// Returning [`ControlFlow::Break`] abandons the generation; the grid keeps every wall
/// removed so far and nothing else.
pub trait StepSink {
    fn step(&mut self, grid: &Grid, wall: WallCandidate) -> ControlFlow<()>;
}

impl<F> StepSink for F
where
    F: FnMut(&Grid, WallCandidate) -> ControlFlow<()>,
{
    fn step(&mut self, grid: &Grid, wall: WallCandidate) -> ControlFlow<()> {
        self(grid, wall)
    }
}

/// Discards every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl StepSink for NoopSink {
    fn step(&mut self, _grid: &Grid, _wall: WallCandidate) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Keeps a copy of every emitted step.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRecorder {
    pub steps: Vec<Step>,
}

impl SnapshotRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removed walls in emission order.
    pub fn walls(&self) -> Vec<WallCandidate> {
        self.steps.iter().map(|step| step.wall).collect()
    }
}

impl StepSink for SnapshotRecorder {
    fn step(&mut self, grid: &Grid, wall: WallCandidate) -> ControlFlow<()> {
        self.steps.push(Step {
            wall,
            snapshot: grid.clone(),
        });
        ControlFlow::Continue(())
    }
}

/// Blocks while the channel buffer is full; stops once the receiver hangs up.
impl StepSink for SyncSender<Step> {
    fn step(&mut self, grid: &Grid, wall: WallCandidate) -> ControlFlow<()> {
        let step = Step {
            wall,
            snapshot: grid.clone(),
        };
        match self.send(step) {
            Ok(()) => ControlFlow::Continue(()),
            Err(_) => ControlFlow::Break(()),
        }
    }
}

/// Result of driving a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    /// The grid is a perfect maze.
    Completed { walls_removed: usize },
    /// The sink stopped the run early.
    Abandoned { walls_removed: usize },
}

impl GenerationStatus {
    pub fn walls_removed(&self) -> usize {
        match *self {
            GenerationStatus::Completed { walls_removed }
            | GenerationStatus::Abandoned { walls_removed } => walls_removed,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, GenerationStatus::Completed { .. })
    }
}

/// Removes walls from a grid and publishes every removal to the sink.
pub(super) struct Carver<'a, S: StepSink + ?Sized> {
    pub(super) grid: &'a mut Grid,
    sink: &'a mut S,
    walls_removed: usize,
}

impl<'a, S: StepSink + ?Sized> Carver<'a, S> {
    pub(super) fn new(grid: &'a mut Grid, sink: &'a mut S) -> Self {
        Carver {
            grid,
            sink,
            walls_removed: 0,
        }
    }

    pub(super) fn carve(&mut self, wall: WallCandidate) -> ControlFlow<()> {
        self.grid.remove_wall(wall.row, wall.col, wall.direction);
        self.walls_removed += 1;
        self.sink.step(self.grid, wall)
    }

    pub(super) fn finish(self, flow: ControlFlow<()>) -> GenerationStatus {
        let walls_removed = self.walls_removed;
        match flow {
            ControlFlow::Continue(()) => GenerationStatus::Completed { walls_removed },
            ControlFlow::Break(()) => GenerationStatus::Abandoned { walls_removed },
        }
    }
}
