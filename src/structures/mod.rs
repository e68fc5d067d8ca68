//! Auxiliary data structures shared by the generators and solvers.

mod disjoint_set;
mod priority_queue;

pub use disjoint_set::DisjointSet;
pub use priority_queue::PriorityQueue;
