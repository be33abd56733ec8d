//! Dense directed cost matrix.

use crate::error::MatrixError;
use rand::Rng;
use u_numflow::random::create_rng;

/// A dense N×N directed cost matrix stored in row-major order.
///
/// Entry `(i, j)` is the cost of travelling from city `i` to city `j`.
/// `f64::INFINITY` means there is no edge. The matrix is immutable once
/// built; all constructors reject NaN and negative costs.
///
/// # Examples
///
/// ```
/// use u_heldkarp::matrix::AdjacencyMatrix;
///
/// let inf = f64::INFINITY;
/// let m = AdjacencyMatrix::from_rows(vec![
///     vec![0.0, 5.0, inf],
///     vec![inf, 0.0, 5.0],
///     vec![5.0, inf, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(m.size(), 3);
/// assert!(m.has_edge(0, 1));
/// assert!(!m.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyMatrix {
    data: Vec<f64>,
    size: usize,
}

impl AdjacencyMatrix {
    /// Builds a matrix from rows. Every row must have as many entries as
    /// there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::RowLength {
                    row: i + 1,
                    expected: size,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from row-major data of length `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if data.len() != size * size {
            return Err(MatrixError::DataLength {
                size,
                len: data.len(),
            });
        }
        for (k, &value) in data.iter().enumerate() {
            let (from, to) = (k / size, k % size);
            if value.is_nan() {
                return Err(MatrixError::NotANumber { from, to });
            }
            if value < 0.0 {
                return Err(MatrixError::NegativeCost { from, to, value });
            }
        }
        Ok(Self { data, size })
    }

    /// Generates a random instance with whole-number costs in `1..=max_cost`.
    ///
    /// Each off-diagonal edge exists independently with probability
    /// `edge_probability`; missing edges are `f64::INFINITY`. The diagonal
    /// is zero. The same seed always produces the same matrix.
    pub fn random(size: usize, edge_probability: f64, max_cost: u32, seed: u64) -> Self {
        let mut rng = create_rng(seed);
        let p = edge_probability.clamp(0.0, 1.0);
        let max_cost = max_cost.max(1);
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                if i == j {
                    continue;
                }
                data[i * size + j] = if rng.random_bool(p) {
                    f64::from(rng.random_range(1..=max_cost))
                } else {
                    f64::INFINITY
                };
            }
        }
        Self { data, size }
    }

    /// Returns the cost of edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Returns `true` if the edge `from -> to` exists (finite cost).
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}
