//! Top-down memoized cost recurrence.

use super::memo::{MemoKey, MemoTable};
use super::subset::CitySet;
use crate::matrix::AdjacencyMatrix;

/// Computes minimum completion costs for one solve session.
///
/// For a state `(i, R)` the cost is
///
/// ```text
/// C(i, {})  = adj[i][start]
/// C(i, R)   = min over j in R with a finite edge i -> j of adj[i][j] + C(j, R \ {j})
/// ```
///
/// and `f64::INFINITY` when no `j` qualifies. Missing edges are pruned,
/// never added. Every non-empty state is stored in the memo table the
/// first time it is computed.
///
/// Recursion depth equals `|R|`.
pub struct CostSolver<'a> {
    matrix: &'a AdjacencyMatrix,
    start: usize,
    memo: &'a mut MemoTable,
}

impl<'a> CostSolver<'a> {
    pub fn new(matrix: &'a AdjacencyMatrix, start: usize, memo: &'a mut MemoTable) -> Self {
        Self {
            matrix,
            start,
            memo,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Minimum cost to leave `city`, visit every member of `remaining`
    /// and return to the start.
    ///
    /// `city` must not be a member of `remaining`.
    pub fn cost(&mut self, city: usize, remaining: CitySet) -> f64 {
        debug_assert!(!remaining.contains(city));
        if remaining.is_empty() {
            return self.matrix.get(city, self.start);
        }

        let key = MemoKey::new(city, remaining);
        if let Some(cached) = self.memo.lookup(&key) {
            return cached;
        }

        let mut min_cost = f64::INFINITY;
        for next in remaining {
            let edge = self.matrix.get(city, next);
            if edge.is_infinite() {
                continue;
            }
            let candidate = edge + self.cost(next, remaining.without(next));
            if candidate < min_cost {
                min_cost = candidate;
            }
        }

        self.memo.insert(key, min_cost)
    }

    /// Cost of stepping `city -> next` and then completing from `next`.
    ///
    /// `None` when the edge is missing or the completion is infinite.
    pub(crate) fn step_cost(&mut self, city: usize, next: usize, remaining: CitySet) -> Option<f64> {
        let edge = self.matrix.get(city, next);
        if edge.is_infinite() {
            return None;
        }
        let total = edge + self.cost(next, remaining.without(next));
        total.is_finite().then_some(total)
    }
}
