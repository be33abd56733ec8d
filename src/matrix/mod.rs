//! Directed cost matrices.
//!
//! An [`AdjacencyMatrix`] holds the N×N directed edge costs of a TSP
//! instance. `f64::INFINITY` marks a missing edge `i -> j`; every other
//! entry is a finite non-negative cost.
//!
//! Matrices can be built from rows, parsed from whitespace-delimited text
//! (`inf` for missing edges), or generated from a seed for testing.

mod adjacency;
mod text;

pub use adjacency::AdjacencyMatrix;
