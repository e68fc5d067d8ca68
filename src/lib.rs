//! Perfect maze generation and pathfinding on rectangular wall grids.
//!
//! A [`maze::Grid`] starts fully walled. One of the [`generators`] removes walls until
//! every cell is connected by exactly one simple path, reporting each removal to a
//! [`generators::StepSink`]. The [`solvers`] then search from the top-left cell to the
//! bottom-right one.
pub mod app;
pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;
pub mod structures;
