//! Held-Karp configuration.

use super::subset::CitySet;

/// How the cost recurrence is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Top-down recursion with memoization. Only reachable states are
    /// stored. Recursion depth equals the number of cities.
    #[default]
    Recursive,

    /// Bottom-up sweep over all subsets in increasing bitmask order.
    /// Evaluates every state, including unreachable ones, but uses no
    /// recursion.
    Iterative,
}

/// Configuration for [`HeldKarpRunner`](super::HeldKarpRunner).
///
/// # Examples
///
/// ```
/// use u_heldkarp::heldkarp::{HeldKarpConfig, Strategy};
///
/// let config = HeldKarpConfig::default()
///     .with_strategy(Strategy::Iterative)
///     .with_max_cities(16)
///     .with_verify_tour(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HeldKarpConfig {
    /// Evaluation strategy.
    pub strategy: Strategy,

    /// Largest instance the runner accepts. Memory grows as `n * 2^n`.
    pub max_cities: usize,

    /// Re-check the reconstructed tour against the reported cost.
    pub verify_tour: bool,
}

impl Default for HeldKarpConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_cities: 20,
            verify_tour: true,
        }
    }
}

impl HeldKarpConfig {
    /// Sets the evaluation strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the largest accepted instance size.
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Enables or disables re-checking the reconstructed tour.
    pub fn with_verify_tour(mut self, verify: bool) -> Self {
        self.verify_tour = verify;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cities == 0 {
            return Err("max_cities must be at least 1".into());
        }
        if self.max_cities > CitySet::CAPACITY {
            return Err(format!(
                "max_cities must be at most {}, got {}",
                CitySet::CAPACITY,
                self.max_cities
            ));
        }
        Ok(())
    }
}
