use super::BiMap;
use crate::compare::Natural;
use crate::raw::{DEFAULT_SEED, RawBiMap};

impl<L, R> BiMap<L, R> {
    /// Creates an empty map with room for at least `capacity` pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let map: BiMap<i32, i32> = BiMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        BiMap {
            raw: RawBiMap::new(Natural, Natural, DEFAULT_SEED, capacity),
        }
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Returns how many pairs the map can hold before its node pool reallocates.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Reserves room for at least `additional` more pairs.
    ///
    /// Slots freed by earlier erasures count towards the reservation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::from([(1, 'a')]);
    /// map.reserve(10);
    /// assert!(map.capacity() >= 11);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn capacity_survives_clear() {
        let mut map: BiMap<u32, u32> = BiMap::with_capacity(16);
        let before = map.capacity();
        assert!(before >= 16);
        map.extend((0..16).map(|i| (i, i)));
        map.clear();
        assert!(map.capacity() >= 16);
    }

    #[test]
    fn reserve_counts_freed_slots() {
        let mut map: BiMap<u32, u32> = (0..8).map(|i| (i, 100 + i)).collect();
        map.erase_left(&0);
        map.erase_left(&1);
        map.reserve(2);
        assert!(map.capacity() >= 8);
        map.reserve(20);
        assert!(map.capacity() >= 26);
    }
}
