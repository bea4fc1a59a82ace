/// A strict weak ordering over `T`, expressed as a "less than" predicate.
///
/// Two values are *equivalent* when neither is less than the other. A [`BiMap`](crate::BiMap)
/// treats equivalent values as the same key on that side.
///
/// Implementations must be irreflexive (`!less(a, a)`) and transitive. Violating this is a
/// logic error: the container may then report wrong results, but it will not corrupt
/// memory.
///
/// Any `Fn(&T, &T) -> bool` is a comparator:
///
/// ```
/// use bitreap::{BiMap, Natural};
///
/// let mut by_length = BiMap::with_comparators(
///     |a: &&str, b: &&str| a.len() < b.len(),
///     Natural,
/// );
/// by_length.insert("three", 3);
/// by_length.insert("one", 1);
/// // "two" has the same length as "one", so it is a duplicate on the left side.
/// assert_eq!(by_length.insert("two", 2), by_length.end_left());
/// assert_eq!(by_length.len(), 2);
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns true if neither value is ordered before the other.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Orders values by their [`Ord`] implementation. The default comparator on both sides.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders values by the reverse of their [`Ord`] implementation.
///
/// ```
/// use bitreap::{BiMap, Descending, Natural};
///
/// let map = BiMap::<_, _, Descending, Natural>::from_iter_with(
///     [(1, 'a'), (3, 'c'), (2, 'b')],
///     Descending,
///     Natural,
/// );
/// let lefts: Vec<_> = map.left_values().copied().collect();
/// assert_eq!(lefts, [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Descending;

impl<T: Ord + ?Sized> Compare<T> for Descending {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
