//! Held-Karp exact TSP solver.
//!
//! Dynamic programming over `(current city, unvisited set)` states.
//! [`CostSolver`] evaluates the minimum completion cost of a state with
//! memoization; [`PathReconstructor`] replays the same choices against
//! the populated [`MemoTable`] to recover an optimal visiting order.
//! [`HeldKarpRunner`] ties both into one solve session.
//!
//! Edges may be asymmetric or missing (`f64::INFINITY`). Time is
//! `O(n^2 2^n)` and memory `O(n 2^n)`, so instances are limited to a
//! few dozen cities at most.
//!
//! # References
//!
//! - Bellman, R. (1962). "Dynamic Programming Treatment of the Travelling
//!   Salesman Problem", *Journal of the ACM* 9(1), 61-63.
//! - Held, M. & Karp, R. M. (1962). "A Dynamic Programming Approach to
//!   Sequencing Problems", *Journal of SIAM* 10(1), 196-210.

mod config;
mod cost;
mod memo;
mod path;
mod runner;
mod subset;
mod sweep;
mod types;

pub use config::{HeldKarpConfig, Strategy};
pub use cost::CostSolver;
pub use memo::{MemoKey, MemoStats, MemoTable};
pub use path::PathReconstructor;
pub use runner::{solve, HeldKarpResult, HeldKarpRunner};
pub use subset::{CitySet, Iter as CitySetIter};
pub use sweep::sweep;
pub use types::Tour;
