//! Tour reconstruction from a populated memo table.

use super::cost::CostSolver;
use super::subset::CitySet;
use log::trace;

/// Replays the cost recurrence to recover the visiting order.
///
/// The memo table only stores costs, so at each state the reconstructor
/// re-evaluates every candidate `j` with the same [`CostSolver`] that
/// filled the table. Missing entries are computed on demand.
///
/// # Tie-breaking
///
/// Candidates are scanned in ascending city index and a candidate only
/// replaces the incumbent when strictly cheaper, so among equal-cost
/// optimal tours the one taking the lowest-index city first (at every
/// step) is returned.
pub struct PathReconstructor<'s, 'a> {
    solver: &'s mut CostSolver<'a>,
}

impl<'s, 'a> PathReconstructor<'s, 'a> {
    pub fn new(solver: &'s mut CostSolver<'a>) -> Self {
        Self { solver }
    }

    /// The cities visited after `city`, ending with the start city.
    ///
    /// `city` itself is not included. Returns `[start]` when `remaining`
    /// is empty and an empty vector when no finite continuation exists.
    pub fn continuation(&mut self, city: usize, remaining: CitySet) -> Vec<usize> {
        let mut path = Vec::with_capacity(remaining.len() + 1);
        let mut current = city;
        let mut remaining = remaining;

        while !remaining.is_empty() {
            match self.best_next(current, remaining) {
                Some(next) => {
                    trace!("reconstruct: {current} -> {next}, {} left", remaining.len() - 1);
                    path.push(next);
                    remaining = remaining.without(next);
                    current = next;
                }
                None => return Vec::new(),
            }
        }

        path.push(self.solver.start());
        path
    }

    /// The lowest-index `j` in `remaining` minimizing
    /// `adj[city][j] + C(j, remaining \ {j})`, if any total is finite.
    pub fn best_next(&mut self, city: usize, remaining: CitySet) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for next in remaining {
            if let Some(total) = self.solver.step_cost(city, next, remaining) {
                if best.is_none_or(|(_, cost)| total < cost) {
                    best = Some((next, total));
                }
            }
        }
        best.map(|(next, _)| next)
    }
}
