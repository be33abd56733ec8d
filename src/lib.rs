//! Exact Traveling Salesman solver for small directed instances.
//!
//! Computes a minimum-cost closed tour with the Held-Karp dynamic
//! program and reconstructs its visiting order:
//!
//! - **Matrix**: dense N×N directed cost matrix, `f64::INFINITY` for a
//!   missing edge, with a plain-text reader and table renderer.
//! - **Held-Karp**: memoized cost recurrence over
//!   `(city, unvisited set)` states, tour reconstruction with
//!   lowest-index tie-breaking, and an iterative sweep alternative.
//!
//! # Example
//!
//! ```
//! use u_heldkarp::heldkarp::solve;
//! use u_heldkarp::matrix::AdjacencyMatrix;
//!
//! let m: AdjacencyMatrix = "0 1 inf\ninf 0 2\n3 inf 0".parse().unwrap();
//! let result = solve(&m, 0).unwrap();
//! assert_eq!(result.cost, 6.0);
//! assert_eq!(result.tour.unwrap().to_string(), "1 → 2 → 3 → 1");
//! ```
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem,
//! next to `u-metaheur`. It is exact where the metaheuristics are
//! approximate, and is meant for instances of roughly 20 cities or
//! fewer.

pub mod error;
pub mod heldkarp;
pub mod matrix;

pub use error::{MatrixError, SolveError};
