use std::{
    sync::mpsc::{Receiver, sync_channel},
    thread::JoinHandle,
};

use crate::{
    error::MazeError,
    generators::{GenerationStatus, Generator, generate_maze, get_rng},
    maze::{Grid, Step},
};

/// Lazily produced generation steps.
///
/// The generator runs on a worker thread and blocks once `buffer` steps are waiting, so
/// the consumer decides the pace. Dropping the stream, or calling [`finish`] before the
/// last step, abandons the generation.
///
/// [`finish`]: SnapshotStream::finish
pub struct SnapshotStream {
    steps: Option<Receiver<Step>>,
    worker: Option<JoinHandle<Result<(Grid, GenerationStatus), MazeError>>>,
}

impl SnapshotStream {
    /// Starts generating a `rows` x `cols` maze in the background.
    pub fn spawn(
        rows: usize,
        cols: usize,
        generator: Generator,
        seed: Option<u64>,
        buffer: usize,
    ) -> Result<Self, MazeError> {
        let mut grid = Grid::create_empty(rows, cols)?;
        let (mut step_tx, step_rx) = sync_channel::<Step>(buffer);
        let worker = std::thread::spawn(move || -> Result<(Grid, GenerationStatus), MazeError> {
            let mut rng = get_rng(seed);
            let status = generate_maze(&mut grid, generator, &mut rng, &mut step_tx)?;
            tracing::debug!("[stream] worker finished: {:?}", status);
            // step_tx is dropped here, which ends the stream
            Ok((grid, status))
        });
        Ok(SnapshotStream {
            steps: Some(step_rx),
            worker: Some(worker),
        })
    }

    /// Stops consuming, waits for the worker and returns the grid it produced.
    ///
    /// If steps were left unread the grid is only partially carved.
    pub fn finish(mut self) -> Result<(Grid, GenerationStatus), MazeError> {
        // Hang up first so a blocked worker sees the disconnect and stops
        self.steps.take();
        self.worker
            .take()
            .map(|worker| worker.join().expect("Generation thread panicked"))
            .expect("Worker is only taken once")
    }
}

impl Iterator for SnapshotStream {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.steps.as_ref()?.recv().ok()
    }
}

impl Drop for SnapshotStream {
    fn drop(&mut self) {
        self.steps.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
