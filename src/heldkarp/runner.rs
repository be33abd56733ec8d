//! Held-Karp solve session.
//!
//! # Algorithm
//!
//! 1. Validate config, instance size and start city
//! 2. Evaluate `C(start, all cities except start)`, filling the memo table
//! 3. If the cost is finite, replay the recurrence from the start to
//!    recover the visiting order
//! 4. Optionally re-check the tour against the reported cost
//!
//! # Reference
//!
//! Held, M. & Karp, R. M. (1962). "A Dynamic Programming Approach to
//! Sequencing Problems", *Journal of SIAM* 10(1), 196-210.

use super::config::{HeldKarpConfig, Strategy};
use super::cost::CostSolver;
use super::memo::MemoTable;
use super::path::PathReconstructor;
use super::subset::CitySet;
use super::sweep::sweep;
use super::types::Tour;
use crate::error::SolveError;
use crate::matrix::AdjacencyMatrix;
use log::{debug, warn};

/// Result of a Held-Karp solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldKarpResult {
    /// Minimum tour cost, `f64::INFINITY` if no tour exists.
    pub cost: f64,

    /// An optimal tour, present exactly when `cost` is finite.
    pub tour: Option<Tour>,

    /// Number of `(city, unvisited set)` states stored.
    pub memo_states: usize,

    /// Memo lookups answered without recomputation.
    pub memo_hits: usize,

    /// Strategy that produced this result.
    pub strategy: Strategy,
}

impl HeldKarpResult {
    /// Whether a Hamiltonian circuit exists.
    pub fn is_feasible(&self) -> bool {
        self.tour.is_some()
    }
}

/// Executes the Held-Karp algorithm.
pub struct HeldKarpRunner;

impl HeldKarpRunner {
    /// Solves the instance exactly from `start` (0-based).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_heldkarp::heldkarp::{HeldKarpConfig, HeldKarpRunner};
    /// use u_heldkarp::matrix::AdjacencyMatrix;
    ///
    /// let m: AdjacencyMatrix = "0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0"
    ///     .parse()
    ///     .unwrap();
    /// let result = HeldKarpRunner::run(&m, 0, &HeldKarpConfig::default()).unwrap();
    /// assert_eq!(result.cost, 80.0);
    /// assert_eq!(result.tour.unwrap().cities(), &[0, 1, 3, 2, 0]);
    /// ```
    pub fn run(
        matrix: &AdjacencyMatrix,
        start: usize,
        config: &HeldKarpConfig,
    ) -> Result<HeldKarpResult, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;

        let n = matrix.size();
        if n > config.max_cities {
            return Err(SolveError::TooManyCities {
                cities: n,
                max: config.max_cities,
            });
        }
        if start >= n {
            return Err(SolveError::StartOutOfRange { start, cities: n });
        }

        debug!("held-karp: {n} cities, start {start}, {:?}", config.strategy);

        let remaining = CitySet::all_except(n, start);
        let mut memo = MemoTable::for_cities(n);

        let cost = match config.strategy {
            Strategy::Recursive => CostSolver::new(matrix, start, &mut memo).cost(start, remaining),
            Strategy::Iterative => sweep(matrix, start, &mut memo),
        };

        let tour = if cost.is_finite() {
            let mut solver = CostSolver::new(matrix, start, &mut memo);
            let continuation = PathReconstructor::new(&mut solver).continuation(start, remaining);
            if continuation.is_empty() {
                return Err(SolveError::Inconsistent(format!(
                    "cost {cost} is finite but no continuation from city {start}"
                )));
            }
            let mut cities = Vec::with_capacity(n + 1);
            cities.push(start);
            cities.extend(continuation);
            let tour = Tour::new(cities, cost);
            if config.verify_tour {
                verify(&tour, matrix)?;
            }
            Some(tour)
        } else {
            warn!("held-karp: no tour through all {n} cities from {start}");
            None
        };

        let stats = memo.stats();
        debug!(
            "held-karp: cost {cost}, {} states, {} hits",
            memo.len(),
            stats.hits
        );

        Ok(HeldKarpResult {
            cost,
            tour,
            memo_states: memo.len(),
            memo_hits: stats.hits,
            strategy: config.strategy,
        })
    }
}

fn verify(tour: &Tour, matrix: &AdjacencyMatrix) -> Result<(), SolveError> {
    if !tour.is_valid(matrix.size()) {
        return Err(SolveError::Inconsistent(format!(
            "reconstructed path {:?} is not a tour",
            tour.cities()
        )));
    }
    let evaluated = tour.evaluate(matrix);
    if evaluated != tour.cost() {
        return Err(SolveError::Inconsistent(format!(
            "tour sums to {evaluated}, solver reported {}",
            tour.cost()
        )));
    }
    Ok(())
}

/// Solves with the default configuration.
pub fn solve(matrix: &AdjacencyMatrix, start: usize) -> Result<HeldKarpResult, SolveError> {
    HeldKarpRunner::run(matrix, start, &HeldKarpConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn classic() -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap()
    }

    /// Minimum over all permutations of the non-start cities.
    fn brute_force(m: &AdjacencyMatrix, start: usize) -> f64 {
        fn permute(
            m: &AdjacencyMatrix,
            start: usize,
            current: usize,
            rest: &mut Vec<usize>,
            acc: f64,
            best: &mut f64,
        ) {
            if rest.is_empty() {
                *best = best.min(acc + m.get(current, start));
                return;
            }
            for k in 0..rest.len() {
                let next = rest.remove(k);
                permute(m, start, next, rest, acc + m.get(current, next), best);
                rest.insert(k, next);
            }
        }
        let mut rest: Vec<usize> = (0..m.size()).filter(|&c| c != start).collect();
        let mut best = INF;
        permute(m, start, start, &mut rest, 0.0, &mut best);
        best
    }

    #[test]
    fn test_classic_both_strategies() {
        let m = classic();
        for strategy in [Strategy::Recursive, Strategy::Iterative] {
            let config = HeldKarpConfig::default().with_strategy(strategy);
            let result = HeldKarpRunner::run(&m, 0, &config).unwrap();
            assert_eq!(result.cost, 80.0);
            assert_eq!(result.strategy, strategy);
            let tour = result.tour.unwrap();
            assert_eq!(tour.cities(), &[0, 1, 3, 2, 0]);
            assert_eq!(tour.cost(), 80.0);
        }
    }

    #[test]
    fn test_three_city_chain_is_infeasible() {
        let m = AdjacencyMatrix::from_rows(vec![
            vec![INF, 5.0, INF],
            vec![INF, INF, 5.0],
            vec![INF, INF, INF],
        ])
        .unwrap();
        let result = solve(&m, 0).unwrap();
        assert!(result.cost.is_infinite());
        assert!(result.tour.is_none());
        assert!(!result.is_feasible());
    }

    #[test]
    fn test_unreachable_city() {
        // nothing enters city 2
        let m = AdjacencyMatrix::from_rows(vec![
            vec![0.0, 1.0, INF, 1.0],
            vec![1.0, 0.0, INF, 1.0],
            vec![1.0, 1.0, 0.0, 1.0],
            vec![1.0, 1.0, INF, 0.0],
        ])
        .unwrap();
        for start in [0, 1, 3] {
            let result = solve(&m, start).unwrap();
            assert!(result.cost.is_infinite());
            assert!(result.tour.is_none());
        }
    }

    #[test]
    fn test_single_city() {
        let m = AdjacencyMatrix::from_rows(vec![vec![0.0]]).unwrap();
        let result = solve(&m, 0).unwrap();
        assert_eq!(result.cost, 0.0);
        assert_eq!(result.tour.unwrap().cities(), &[0, 0]);
    }

    #[test]
    fn test_single_city_without_self_loop() {
        let m = AdjacencyMatrix::from_rows(vec![vec![INF]]).unwrap();
        let result = solve(&m, 0).unwrap();
        assert!(result.tour.is_none());
    }

    #[test]
    fn test_two_cities() {
        let m = AdjacencyMatrix::from_rows(vec![vec![0.0, 3.0], vec![4.0, 0.0]]).unwrap();
        let result = solve(&m, 1).unwrap();
        assert_eq!(result.cost, 7.0);
        assert_eq!(result.tour.unwrap().cities(), &[1, 0, 1]);
    }

    #[test]
    fn test_start_out_of_range() {
        let err = solve(&classic(), 4).unwrap_err();
        assert!(matches!(
            err,
            SolveError::StartOutOfRange {
                start: 4,
                cities: 4
            }
        ));
    }

    #[test]
    fn test_too_many_cities() {
        let config = HeldKarpConfig::default().with_max_cities(3);
        let err = HeldKarpRunner::run(&classic(), 0, &config).unwrap_err();
        assert!(matches!(err, SolveError::TooManyCities { cities: 4, max: 3 }));
    }

    #[test]
    fn test_invalid_config() {
        let config = HeldKarpConfig::default().with_max_cities(0);
        let err = HeldKarpRunner::run(&classic(), 0, &config).unwrap_err();
        assert!(matches!(err, SolveError::InvalidConfig(_)));
    }

    #[test]
    fn test_matches_brute_force() {
        for seed in 0..30 {
            let n = 2 + (seed as usize % 6);
            let m = AdjacencyMatrix::random(n, 0.7, 100, seed);
            let start = seed as usize % n;
            let expected = brute_force(&m, start);
            let result = solve(&m, start).unwrap();
            assert_eq!(result.cost, expected, "seed {seed}, n {n}");
            assert_eq!(result.tour.is_some(), expected.is_finite());
        }
    }

    #[test]
    fn test_repeat_solves_are_identical() {
        let m = AdjacencyMatrix::random(9, 0.8, 1000, 3);
        let a = solve(&m, 2).unwrap();
        let b = solve(&m, 2).unwrap();
        assert_eq!(a.cost.to_bits(), b.cost.to_bits());
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.memo_states, b.memo_states);
    }

    #[test]
    fn test_verify_rejects_cost_mismatch() {
        let tour = Tour::new(vec![0, 1, 3, 2, 0], 79.0);
        assert!(matches!(
            verify(&tour, &classic()),
            Err(SolveError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_verify_rejects_open_path() {
        let tour = Tour::new(vec![0, 1, 3, 2, 1], 80.0);
        assert!(matches!(
            verify(&tour, &classic()),
            Err(SolveError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_verify_accepts_solver_tour() {
        let tour = Tour::new(vec![0, 1, 3, 2, 0], 80.0);
        assert!(verify(&tour, &classic()).is_ok());
    }

    #[test]
    fn test_fractional_costs_verify() {
        // non-integral costs still re-evaluate to the exact reported value
        let m = AdjacencyMatrix::from_rows(vec![
            vec![0.0, 0.1, 0.7, 0.3],
            vec![0.2, 0.0, 0.1, 0.9],
            vec![0.3, 0.6, 0.0, 0.1],
            vec![0.1, 0.4, 0.2, 0.0],
        ])
        .unwrap();
        let result = solve(&m, 0).unwrap();
        let tour = result.tour.unwrap();
        assert_eq!(tour.evaluate(&m), result.cost);
    }

    #[test]
    fn test_memo_reused_during_reconstruction() {
        let m = AdjacencyMatrix::random(8, 1.0, 50, 11);
        let result = solve(&m, 0).unwrap();
        assert!(result.memo_hits > 0);
        assert!(result.memo_states > 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::{prop_assert, prop_assert_eq, prop_oneof, proptest, Just};
        use proptest::strategy::Strategy as ValueStrategy;

        fn instance() -> impl ValueStrategy<Value = (AdjacencyMatrix, usize)> {
            (1usize..=7).prop_flat_map(|n| {
                let cell = prop_oneof![
                    3 => (0u32..50).prop_map(f64::from),
                    1 => Just(f64::INFINITY),
                ];
                (
                    proptest::collection::vec(cell, n * n)
                        .prop_map(move |data| AdjacencyMatrix::from_data(n, data).unwrap()),
                    0..n,
                )
            })
        }

        proptest! {
            #[test]
            fn cost_is_optimal((m, start) in instance()) {
                let result = solve(&m, start).unwrap();
                prop_assert_eq!(result.cost, brute_force(&m, start));
            }

            #[test]
            fn tour_is_valid_and_sums_to_cost((m, start) in instance()) {
                let result = solve(&m, start).unwrap();
                match result.tour {
                    Some(tour) => {
                        prop_assert!(tour.is_valid(m.size()));
                        prop_assert_eq!(tour.start(), start);
                        prop_assert_eq!(tour.evaluate(&m), result.cost);
                    }
                    None => prop_assert!(result.cost.is_infinite()),
                }
            }

            #[test]
            fn strategies_agree((m, start) in instance()) {
                let recursive = solve(&m, start).unwrap();
                let config = HeldKarpConfig::default().with_strategy(Strategy::Iterative);
                let iterative = HeldKarpRunner::run(&m, start, &config).unwrap();
                prop_assert_eq!(recursive.cost, iterative.cost);
                prop_assert_eq!(recursive.tour, iterative.tour);
            }
        }
    }
}
