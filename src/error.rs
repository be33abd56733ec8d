//! Error types.

use thiserror::Error;

/// Errors raised while building or loading an [`AdjacencyMatrix`](crate::matrix::AdjacencyMatrix).
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The matrix has no rows.
    #[error("matrix is empty")]
    Empty,

    /// A row does not have exactly N entries. `row` is 1-based.
    #[error("Line {row} does not have {expected} entries (found {found})")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Row-major data does not hold `size * size` entries.
    #[error("got {len} entries for a {size}x{size} matrix")]
    DataLength { size: usize, len: usize },

    /// A token could not be read as a cost. `line` and `column` are 1-based.
    #[error("invalid cost {token:?} at line {line}, column {column}")]
    InvalidToken {
        line: usize,
        column: usize,
        token: String,
    },

    /// Costs must be non-negative.
    #[error("negative cost {value} on edge {from} -> {to}")]
    NegativeCost { from: usize, to: usize, value: f64 },

    /// NaN is not a cost.
    #[error("cost on edge {from} -> {to} is NaN")]
    NotANumber { from: usize, to: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised by [`HeldKarpRunner`](crate::heldkarp::HeldKarpRunner).
///
/// An infeasible instance is not an error: it is reported as a result
/// with infinite cost and no tour.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The instance is larger than the configured `max_cities`.
    #[error("{cities} cities exceeds the limit of {max}")]
    TooManyCities { cities: usize, max: usize },

    #[error("start city {start} is out of range for {cities} cities")]
    StartOutOfRange { start: usize, cities: usize },

    /// The memo table and the reconstructed path disagree.
    ///
    /// This is a defect in the solver, never a property of the input.
    #[error("internal inconsistency: {0}")]
    Inconsistent(String),
}
