//! Bitmask set of cities.

use std::fmt;

/// A set of city indices stored as a 64-bit mask.
///
/// Bit `k` is set when city `k` is a member. Equality and hashing are
/// O(1) and independent of insertion order, so two ways of reaching the
/// same unvisited set produce the same memo key.
///
/// Iteration yields members in ascending index order.
///
/// # Examples
///
/// ```
/// use u_heldkarp::heldkarp::CitySet;
///
/// let set = CitySet::all_except(4, 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 1, 3]);
/// assert_eq!(set.without(1).len(), 2);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CitySet(u64);

impl CitySet {
    /// Maximum number of distinct cities a set can hold.
    pub const CAPACITY: usize = 64;

    /// The empty set.
    pub const fn empty() -> Self {
        CitySet(0)
    }

    /// Builds a set directly from its bitmask.
    pub const fn from_bits(bits: u64) -> Self {
        CitySet(bits)
    }

    /// Cities `0..n` except `excluded`.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`CitySet::CAPACITY`].
    pub fn all_except(n: usize, excluded: usize) -> Self {
        assert!(n <= Self::CAPACITY, "{n} cities exceed bitmask capacity");
        let all = if n == Self::CAPACITY {
            u64::MAX
        } else {
            (1u64 << n) - 1
        };
        CitySet(all).without(excluded)
    }

    /// The raw bitmask.
    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn contains(self, city: usize) -> bool {
        city < Self::CAPACITY && self.0 & (1u64 << city) != 0
    }

    /// Returns a copy with `city` added.
    ///
    /// # Panics
    ///
    /// Panics if `city` is not below [`CitySet::CAPACITY`].
    pub const fn with(self, city: usize) -> Self {
        assert!(city < Self::CAPACITY, "city index exceeds bitmask capacity");
        CitySet(self.0 | (1u64 << city))
    }

    /// Returns a copy with `city` removed.
    pub const fn without(self, city: usize) -> Self {
        if city < Self::CAPACITY {
            CitySet(self.0 & !(1u64 << city))
        } else {
            self
        }
    }

    /// Members in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<usize> for CitySet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(CitySet::empty(), CitySet::with)
    }
}

impl IntoIterator for CitySet {
    type Item = usize;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Debug for CitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ascending iterator over the members of a [`CitySet`].
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let city = self.0.trailing_zeros() as usize;
        // clear lowest set bit
        self.0 &= self.0 - 1;
        Some(city)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}
