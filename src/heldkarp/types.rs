//! Tour representation.

use crate::matrix::AdjacencyMatrix;
use std::fmt;

/// A closed tour: starts and ends at the same city and visits every
/// other city exactly once in between.
///
/// `cities` has length N+1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<usize>,
    cost: f64,
}

impl Tour {
    pub(crate) fn new(cities: Vec<usize>, cost: f64) -> Self {
        Self { cities, cost }
    }

    /// Visiting order, 0-based, first and last element equal.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Total cost reported by the solver.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn start(&self) -> usize {
        self.cities[0]
    }

    /// Number of edges traversed (equals the number of cities).
    pub fn len(&self) -> usize {
        self.cities.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consecutive `(from, to, cost)` legs.
    pub fn edges<'m>(
        &'m self,
        matrix: &'m AdjacencyMatrix,
    ) -> impl Iterator<Item = (usize, usize, f64)> + 'm {
        self.cities
            .windows(2)
            .map(move |w| (w[0], w[1], matrix.get(w[0], w[1])))
    }

    /// Sums the leg costs of this tour in `matrix`.
    ///
    /// Legs are folded from the last to the first, matching the
    /// association order of the cost recurrence, so for a tour produced
    /// by the solver the result is bit-identical to [`Tour::cost`].
    pub fn evaluate(&self, matrix: &AdjacencyMatrix) -> f64 {
        let legs: Vec<f64> = self.edges(matrix).map(|(_, _, c)| c).collect();
        legs.iter().rev().fold(0.0, |acc, &c| c + acc)
    }

    /// Checks that this is a closed tour over all `n` cities.
    pub fn is_valid(&self, n: usize) -> bool {
        if self.cities.len() != n + 1 || self.cities.first() != self.cities.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.cities[..n] {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

/// 1-based rendering: `1 → 2 → 4 → 3 → 1`.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, city) in self.cities.iter().enumerate() {
            if k > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{}", city + 1)?;
        }
        Ok(())
    }
}
