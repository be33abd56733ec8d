//! Subproblem memo table.

use super::subset::CitySet;
use std::collections::HashMap;

/// Identifies one Held-Karp subproblem: standing at `city` with
/// `remaining` still to visit before returning to the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey {
    pub city: usize,
    pub remaining: CitySet,
}

impl MemoKey {
    pub fn new(city: usize, remaining: CitySet) -> Self {
        Self { city, remaining }
    }
}

/// Counters describing how a [`MemoTable`] was used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups answered from the table.
    pub hits: usize,
    /// Lookups that found nothing.
    pub misses: usize,
    /// Entries written.
    pub inserts: usize,
}

/// Minimum completion cost for every subproblem solved so far.
///
/// Scoped to one solve session: one matrix, one start city. Values may be
/// `f64::INFINITY` when a state cannot complete. Entries are never
/// overwritten once stored.
#[derive(Debug, Clone, Default)]
pub struct MemoTable {
    entries: HashMap<MemoKey, f64>,
    stats: MemoStats,
}

impl MemoTable {
    /// Upper bound on the entries [`MemoTable::for_cities`] reserves.
    pub const MAX_RESERVED: usize = 1 << 16;

    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table sized for an `n`-city instance.
    ///
    /// Reserves room for every `(city, subset)` pair, capped at
    /// [`MemoTable::MAX_RESERVED`] entries.
    pub fn for_cities(n: usize) -> Self {
        let states = match n {
            0 => 0,
            n if n > 16 => Self::MAX_RESERVED,
            n => (n << (n - 1)).min(Self::MAX_RESERVED),
        };
        Self {
            entries: HashMap::with_capacity(states),
            stats: MemoStats::default(),
        }
    }

    /// Looks up a stored cost, counting the hit or miss.
    pub fn lookup(&mut self, key: &MemoKey) -> Option<f64> {
        match self.entries.get(key) {
            Some(&cost) => {
                self.stats.hits += 1;
                Some(cost)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Reads a stored cost without touching the counters.
    pub fn peek(&self, key: &MemoKey) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Stores `cost` under `key` unless an entry already exists.
    /// Returns the value held by the table afterwards.
    pub fn insert(&mut self, key: MemoKey, cost: f64) -> f64 {
        let stats = &mut self.stats;
        *self.entries.entry(key).or_insert_with(|| {
            stats.inserts += 1;
            cost
        })
    }

    /// Whether `key` has a stored cost. Does not touch the counters.
    pub fn contains(&self, key: &MemoKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no state has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Usage counters accumulated since creation.
    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Number of entries that can be stored without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterates over all stored `(key, cost)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&MemoKey, &f64)> {
        self.entries.iter()
    }
}
