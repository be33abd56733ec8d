//! Bottom-up evaluation of the cost recurrence.
//!
//! Same recurrence and memo contents as [`CostSolver`](super::CostSolver)
//! but without recursion. Subsets are visited in increasing bitmask
//! order; removing a member always yields a smaller mask, so every
//! `(j, R \ {j})` is stored before `R` is evaluated.

use super::memo::{MemoKey, MemoTable};
use super::subset::CitySet;
use crate::matrix::AdjacencyMatrix;

/// Fills `memo` with every state of the instance and returns the
/// minimum tour cost from `start`.
///
/// States `(start, R)` are only evaluated for the full set, since the
/// tour never passes through the start city in between.
pub fn sweep(matrix: &AdjacencyMatrix, start: usize, memo: &mut MemoTable) -> f64 {
    let n = matrix.size();
    let full = CitySet::all_except(n, start);
    if full.is_empty() {
        return matrix.get(start, start);
    }

    for bits in 1..=full.bits() {
        if bits & !full.bits() != 0 {
            continue;
        }
        let remaining = CitySet::from_bits(bits);
        for city in 0..n {
            if remaining.contains(city) || (city == start && remaining != full) {
                continue;
            }
            let cost = evaluate(matrix, start, memo, city, remaining);
            memo.insert(MemoKey::new(city, remaining), cost);
        }
    }

    memo.peek(&MemoKey::new(start, full)).unwrap_or(f64::INFINITY)
}

fn evaluate(
    matrix: &AdjacencyMatrix,
    start: usize,
    memo: &mut MemoTable,
    city: usize,
    remaining: CitySet,
) -> f64 {
    let mut min_cost = f64::INFINITY;
    for next in remaining {
        let edge = matrix.get(city, next);
        if edge.is_infinite() {
            continue;
        }
        let rest = remaining.without(next);
        let completion = if rest.is_empty() {
            matrix.get(next, start)
        } else {
            let stored = memo.lookup(&MemoKey::new(next, rest));
            debug_assert!(stored.is_some(), "state ({next}, {rest:?}) not yet swept");
            stored.unwrap_or(f64::INFINITY)
        };
        let candidate = edge + completion;
        if candidate < min_cost {
            min_cost = candidate;
        }
    }
    min_cost
}
