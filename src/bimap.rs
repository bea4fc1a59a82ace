use alloc::borrow::Cow;
use core::fmt;

use crate::compare::{Compare, Natural};
use crate::error::BiMapError;
use crate::raw::{DEFAULT_SEED, RawBiMap};

mod capacity;
mod iter;
mod position;

pub use iter::{LeftIter, LeftValues, RightIter, RightValues};
pub use position::{LeftPos, RightPos};

/// An ordered bidirectional map built from two [treaps] that share their nodes.
///
/// A `BiMap` stores `(L, R)` pairs in which every left value is unique and every right
/// value is unique. Both sides are kept sorted, the left side under the comparator `CL`
/// and the right side under `CR` (both default to [`Natural`], i.e. [`Ord`]). Looking a
/// pair up, inserting it or erasing it by either side takes expected O(log n) time.
///
/// Each stored pair is a single node that belongs to both trees at once. A position
/// found in one ordering can therefore be turned into the position of the same pair in
/// the other ordering in O(1) with [`LeftPos::flip`] / [`RightPos::flip`].
///
/// Uniqueness is decided by the comparators: two values are the same key when neither is
/// less than the other. Inserting a pair whose left *or* right value is already present
/// is rejected; nothing is overwritten.
///
/// # Positions
///
/// Besides the usual iterators, a `BiMap` hands out copyable positions ([`LeftPos`],
/// [`RightPos`]) that play the role of C++-style iterators: they can be stepped with
/// [`next_left`](BiMap::next_left) / [`prev_left`](BiMap::prev_left), compared with the
/// end position, dereferenced, and used to erase. A position stays valid across
/// insertions and across erasure of other pairs; it is invalidated by erasing its own
/// pair. Each tree ends with a valueless sentinel node, which is the end position of
/// both orderings.
///
/// # Examples
///
/// ```
/// use bitreap::BiMap;
///
/// let mut ports = BiMap::new();
/// ports.insert("http", 80);
/// ports.insert("ssh", 22);
/// ports.insert("https", 443);
///
/// assert_eq!(ports.get_left(&"ssh"), Some(&22));
/// assert_eq!(ports.get_right(&443), Some(&"https"));
///
/// // Neither side may repeat.
/// assert_eq!(ports.insert("telnet", 22), ports.end_left());
/// assert_eq!(ports.len(), 3);
///
/// // Both orderings are available.
/// let by_name: Vec<_> = ports.left_values().copied().collect();
/// let by_port: Vec<_> = ports.right_values().copied().collect();
/// assert_eq!(by_name, ["http", "https", "ssh"]);
/// assert_eq!(by_port, [22, 80, 443]);
/// ```
///
/// [treaps]: https://en.wikipedia.org/wiki/Treap
pub struct BiMap<L, R, CL = Natural, CR = Natural> {
    raw: RawBiMap<L, R, CL, CR>,
}

impl<L, R> BiMap<L, R> {
    /// Makes a new, empty `BiMap` ordered by `L`'s and `R`'s [`Ord`] implementations.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Makes a new, empty `BiMap` whose node priorities are drawn from a generator seeded
    /// with `seed`.
    ///
    /// Two maps with the same seed that see the same sequence of operations build
    /// identically shaped trees.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_comparators_and_seed(Natural, Natural, seed)
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Makes a new, empty `BiMap` ordered by the given comparators.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::{BiMap, Descending, Natural};
    ///
    /// let mut map = BiMap::with_comparators(Descending, Natural);
    /// map.insert(1, 'x');
    /// map.insert(2, 'y');
    /// assert_eq!(map.left_values().copied().collect::<Vec<_>>(), [2, 1]);
    /// ```
    #[must_use]
    pub fn with_comparators(left_cmp: CL, right_cmp: CR) -> Self {
        Self::with_comparators_and_seed(left_cmp, right_cmp, DEFAULT_SEED)
    }

    /// Makes a new, empty `BiMap` with the given comparators and priority seed.
    #[must_use]
    pub fn with_comparators_and_seed(left_cmp: CL, right_cmp: CR, seed: u64) -> Self {
        BiMap {
            raw: RawBiMap::new(left_cmp, right_cmp, seed, 0),
        }
    }

    /// Returns the number of pairs in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map holds no pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.begin_left(), map.end_left());
    /// map.insert(1, 'a');
    /// assert!(!map.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every pair.
    ///
    /// All positions into the map are invalidated.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Swaps the contents, comparators included, of two maps.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn swap(&mut self, other: &mut Self) {
        self.raw.swap(&mut other.raw);
    }

    /// Returns the comparator ordering the left side.
    pub fn left_comparator(&self) -> &CL {
        self.raw.left_comparator()
    }

    /// Returns the comparator ordering the right side.
    pub fn right_comparator(&self) -> &CR {
        self.raw.right_comparator()
    }

    /// Gets an iterator over the pairs, sorted by left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let map = BiMap::from([(2, 'a'), (1, 'b')]);
    /// let mut iter = map.iter_left();
    /// assert_eq!(iter.next(), Some((&1, &'b')));
    /// assert_eq!(iter.next_back(), Some((&2, &'a')));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter_left(&self) -> LeftIter<'_, L, R, CL, CR> {
        LeftIter::new(&self.raw)
    }

    /// Gets an iterator over the pairs, sorted by right value.
    ///
    /// Items are still `(left, right)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let map = BiMap::from([(2, 'a'), (1, 'b')]);
    /// let pairs: Vec<_> = map.iter_right().collect();
    /// assert_eq!(pairs, [(&2, &'a'), (&1, &'b')]);
    /// ```
    pub fn iter_right(&self) -> RightIter<'_, L, R, CL, CR> {
        RightIter::new(&self.raw)
    }

    /// Gets an iterator over the left values, in left order.
    pub fn left_values(&self) -> LeftValues<'_, L, R, CL, CR> {
        LeftValues::new(self.iter_left())
    }

    /// Gets an iterator over the right values, in right order.
    pub fn right_values(&self) -> RightValues<'_, L, R, CL, CR> {
        RightValues::new(self.iter_right())
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Builds a map with the given comparators from an iterator of pairs.
    ///
    /// Pairs that clash with an earlier pair on either side are dropped.
    pub fn from_iter_with<I>(iter: I, left_cmp: CL, right_cmp: CR) -> Self
    where
        I: IntoIterator<Item = (L, R)>,
    {
        let mut map = Self::with_comparators(left_cmp, right_cmp);
        map.extend(iter);
        map
    }

    /// Inserts a pair and returns its position in the left ordering.
    ///
    /// If the left value or the right value is already present, nothing is inserted and the
    /// end position of the left ordering is returned. Existing pairs are never
    /// overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// let pos = map.insert(1, "a");
    /// assert_eq!(map.left_value(pos), &1);
    ///
    /// assert_eq!(map.insert(1, "z"), map.end_left());
    /// assert_eq!(map.insert(2, "a"), map.end_left());
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.at_left(&1), Ok(&"a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn insert(&mut self, left: L, right: R) -> LeftPos {
        match self.raw.insert(left, right) {
            Ok(handle) => LeftPos(handle),
            Err(_) => self.end_left(),
        }
    }

    /// Returns `true` if some pair has a left value equivalent to `left`.
    pub fn contains_left(&self, left: &L) -> bool {
        self.raw.find_left(left).is_some()
    }

    /// Returns `true` if some pair has a right value equivalent to `right`.
    pub fn contains_right(&self, right: &R) -> bool {
        self.raw.find_right(right).is_some()
    }

    /// Returns the right value paired with `left`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let map = BiMap::from([(1, 'a')]);
    /// assert_eq!(map.get_left(&1), Some(&'a'));
    /// assert_eq!(map.get_left(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn get_left(&self, left: &L) -> Option<&R> {
        let handle = self.raw.find_left(left)?;
        self.raw.pair(handle).map(|(_, right)| right)
    }

    /// Returns the left value paired with `right`.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn get_right(&self, right: &R) -> Option<&L> {
        let handle = self.raw.find_right(right)?;
        self.raw.pair(handle).map(|(left, _)| left)
    }

    /// Returns the right value paired with `left`, or an error if `left` is absent.
    ///
    /// # Errors
    ///
    /// [`BiMapError::LeftKeyNotFound`] if no pair has this left value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::{BiMap, BiMapError};
    ///
    /// let map = BiMap::from([(1, 'a')]);
    /// assert_eq!(map.at_left(&1), Ok(&'a'));
    /// assert_eq!(map.at_left(&2), Err(BiMapError::LeftKeyNotFound));
    /// ```
    pub fn at_left(&self, left: &L) -> Result<&R, BiMapError> {
        self.get_left(left).ok_or(BiMapError::LeftKeyNotFound)
    }

    /// Returns the left value paired with `right`, or an error if `right` is absent.
    ///
    /// # Errors
    ///
    /// [`BiMapError::RightKeyNotFound`] if no pair has this right value.
    pub fn at_right(&self, right: &R) -> Result<&L, BiMapError> {
        self.get_right(right).ok_or(BiMapError::RightKeyNotFound)
    }

    /// Returns the right value paired with `left`, or `R::default()` if `left` is absent.
    ///
    /// The map is never modified: a missing key is not inserted, and no existing pair that
    /// happens to hold the default value is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let map = BiMap::from([(1, 10)]);
    /// assert_eq!(*map.at_left_or_default(&1), 10);
    /// assert_eq!(*map.at_left_or_default(&2), 0);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn at_left_or_default(&self, left: &L) -> Cow<'_, R>
    where
        R: Clone + Default,
    {
        self.get_left(left).map_or_else(|| Cow::Owned(R::default()), Cow::Borrowed)
    }

    /// Returns the left value paired with `right`, or `L::default()` if `right` is absent.
    ///
    /// Like [`at_left_or_default`](BiMap::at_left_or_default), this never modifies the map.
    pub fn at_right_or_default(&self, right: &R) -> Cow<'_, L>
    where
        L: Clone + Default,
    {
        self.get_right(right).map_or_else(|| Cow::Owned(L::default()), Cow::Borrowed)
    }

    /// Erases the pair whose left value is `left`. Returns whether a pair was erased.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::from([(1, 'a'), (2, 'b')]);
    /// assert!(map.erase_left(&1));
    /// assert!(!map.erase_left(&1));
    /// assert!(!map.contains_right(&'a'));
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn erase_left(&mut self, left: &L) -> bool {
        self.remove_left(left).is_some()
    }

    /// Erases the pair whose right value is `right`. Returns whether a pair was erased.
    pub fn erase_right(&mut self, right: &R) -> bool {
        self.remove_right(right).is_some()
    }

    /// Removes the pair whose left value is `left` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::from([(1, 'a')]);
    /// assert_eq!(map.remove_left(&1), Some((1, 'a')));
    /// assert_eq!(map.remove_left(&1), None);
    /// ```
    pub fn remove_left(&mut self, left: &L) -> Option<(L, R)> {
        let handle = self.raw.find_left(left)?;
        Some(self.raw.erase(handle))
    }

    /// Removes the pair whose right value is `right` and returns it.
    pub fn remove_right(&mut self, right: &R) -> Option<(L, R)> {
        let handle = self.raw.find_right(right)?;
        Some(self.raw.erase(handle))
    }
}

impl<L, R, CL, CR> Clone for BiMap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Clone + Compare<L>,
    CR: Clone + Compare<R>,
{
    /// Copies the map by re-inserting every pair, in left order, into a new map.
    fn clone(&self) -> Self {
        BiMap { raw: self.raw.clone() }
    }
}

/// Two maps are equal when they have the same length and, walking both in left order,
/// the pairs at each rank are equivalent on both sides under `self`'s comparators.
impl<L, R, CL, CR> PartialEq for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn eq(&self, other: &Self) -> bool {
        let (left_cmp, right_cmp) = (self.left_comparator(), self.right_comparator());
        self.len() == other.len()
            && self
                .iter_left()
                .zip(other.iter_left())
                .all(|((a_left, a_right), (b_left, b_right))| {
                    left_cmp.equivalent(a_left, b_left) && right_cmp.equivalent(a_right, b_right)
                })
    }
}

impl<L, R, CL: Compare<L>, CR: Compare<R>> Eq for BiMap<L, R, CL, CR> {}

impl<L: fmt::Debug, R: fmt::Debug, CL, CR> fmt::Debug for BiMap<L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_left()).finish()
    }
}

impl<L, R, CL: Default, CR: Default> Default for BiMap<L, R, CL, CR> {
    fn default() -> Self {
        BiMap::with_comparators(CL::default(), CR::default())
    }
}

impl<L, R, CL, CR> FromIterator<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L> + Default,
    CR: Compare<R> + Default,
{
    fn from_iter<T: IntoIterator<Item = (L, R)>>(iter: T) -> Self {
        BiMap::from_iter_with(iter, CL::default(), CR::default())
    }
}

/// Pairs that clash with a stored pair on either side are skipped.
impl<L, R, CL, CR> Extend<(L, R)> for BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    fn extend<T: IntoIterator<Item = (L, R)>>(&mut self, iter: T) {
        for (left, right) in iter {
            self.insert(left, right);
        }
    }
}

impl<L: Ord, R: Ord, const N: usize> From<[(L, R); N]> for BiMap<L, R> {
    fn from(pairs: [(L, R); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, L, R, CL, CR> IntoIterator for &'a BiMap<L, R, CL, CR> {
    type Item = (&'a L, &'a R);
    type IntoIter = LeftIter<'a, L, R, CL, CR>;

    fn into_iter(self) -> LeftIter<'a, L, R, CL, CR> {
        self.iter_left()
    }
}
