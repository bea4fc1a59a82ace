use core::fmt;
use core::iter::FusedIterator;

use crate::compare::Natural;
use crate::raw::{Handle, RawBiMap};

/// An iterator over the pairs of a `BiMap`, sorted by left value.
///
/// This `struct` is created by [`BiMap::iter_left`](super::BiMap::iter_left).
pub struct LeftIter<'a, L, R, CL = Natural, CR = Natural> {
    raw: &'a RawBiMap<L, R, CL, CR>,
    /// Next node yielded from the front.
    front: Handle,
    /// One past the next node yielded from the back.
    back: Handle,
    remaining: usize,
}

impl<'a, L, R, CL, CR> LeftIter<'a, L, R, CL, CR> {
    pub(super) fn new(raw: &'a RawBiMap<L, R, CL, CR>) -> Self {
        Self {
            raw,
            front: raw.begin_left(),
            back: raw.end_left(),
            remaining: raw.len(),
        }
    }
}

impl<'a, L, R, CL, CR> Iterator for LeftIter<'a, L, R, CL, CR> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.front = self.raw.next_left(current);
        self.remaining -= 1;
        self.raw.pair(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn count(self) -> usize {
        self.remaining
    }
}

impl<L, R, CL, CR> DoubleEndedIterator for LeftIter<'_, L, R, CL, CR> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.raw.prev_left(self.back);
        self.remaining -= 1;
        self.raw.pair(self.back)
    }
}

impl<L, R, CL, CR> ExactSizeIterator for LeftIter<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> FusedIterator for LeftIter<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> Clone for LeftIter<'_, L, R, CL, CR> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<L: fmt::Debug, R: fmt::Debug, CL, CR> fmt::Debug for LeftIter<'_, L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the pairs of a `BiMap`, sorted by right value.
///
/// Items are `(left, right)` like those of [`LeftIter`]; only the order differs. This
/// `struct` is created by [`BiMap::iter_right`](super::BiMap::iter_right).
pub struct RightIter<'a, L, R, CL = Natural, CR = Natural> {
    raw: &'a RawBiMap<L, R, CL, CR>,
    front: Handle,
    back: Handle,
    remaining: usize,
}

impl<'a, L, R, CL, CR> RightIter<'a, L, R, CL, CR> {
    pub(super) fn new(raw: &'a RawBiMap<L, R, CL, CR>) -> Self {
        Self {
            raw,
            front: raw.begin_right(),
            back: raw.end_right(),
            remaining: raw.len(),
        }
    }
}

impl<'a, L, R, CL, CR> Iterator for RightIter<'a, L, R, CL, CR> {
    type Item = (&'a L, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.front = self.raw.next_right(current);
        self.remaining -= 1;
        self.raw.pair(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn count(self) -> usize {
        self.remaining
    }
}

impl<L, R, CL, CR> DoubleEndedIterator for RightIter<'_, L, R, CL, CR> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.raw.prev_right(self.back);
        self.remaining -= 1;
        self.raw.pair(self.back)
    }
}

impl<L, R, CL, CR> ExactSizeIterator for RightIter<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> FusedIterator for RightIter<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> Clone for RightIter<'_, L, R, CL, CR> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<L: fmt::Debug, R: fmt::Debug, CL, CR> fmt::Debug for RightIter<'_, L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the left values of a `BiMap`, in left order.
///
/// This `struct` is created by [`BiMap::left_values`](super::BiMap::left_values).
pub struct LeftValues<'a, L, R, CL = Natural, CR = Natural> {
    inner: LeftIter<'a, L, R, CL, CR>,
}

impl<'a, L, R, CL, CR> LeftValues<'a, L, R, CL, CR> {
    pub(super) const fn new(inner: LeftIter<'a, L, R, CL, CR>) -> Self {
        Self { inner }
    }
}

impl<'a, L, R, CL, CR> Iterator for LeftValues<'a, L, R, CL, CR> {
    type Item = &'a L;

    fn next(&mut self) -> Option<&'a L> {
        self.inner.next().map(|(left, _)| left)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R, CL, CR> DoubleEndedIterator for LeftValues<'_, L, R, CL, CR> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(left, _)| left)
    }
}

impl<L, R, CL, CR> ExactSizeIterator for LeftValues<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> FusedIterator for LeftValues<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> Clone for LeftValues<'_, L, R, CL, CR> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<L: fmt::Debug, R, CL, CR> fmt::Debug for LeftValues<'_, L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the right values of a `BiMap`, in right order.
///
/// This `struct` is created by [`BiMap::right_values`](super::BiMap::right_values).
pub struct RightValues<'a, L, R, CL = Natural, CR = Natural> {
    inner: RightIter<'a, L, R, CL, CR>,
}

impl<'a, L, R, CL, CR> RightValues<'a, L, R, CL, CR> {
    pub(super) const fn new(inner: RightIter<'a, L, R, CL, CR>) -> Self {
        Self { inner }
    }
}

impl<'a, L, R, CL, CR> Iterator for RightValues<'a, L, R, CL, CR> {
    type Item = &'a R;

    fn next(&mut self) -> Option<&'a R> {
        self.inner.next().map(|(_, right)| right)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<L, R, CL, CR> DoubleEndedIterator for RightValues<'_, L, R, CL, CR> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, right)| right)
    }
}

impl<L, R, CL, CR> ExactSizeIterator for RightValues<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> FusedIterator for RightValues<'_, L, R, CL, CR> {}

impl<L, R, CL, CR> Clone for RightValues<'_, L, R, CL, CR> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<L, R: fmt::Debug, CL, CR> fmt::Debug for RightValues<'_, L, R, CL, CR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::BiMap;
    use alloc::format;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    fn sample() -> BiMap<u32, char> {
        BiMap::from([(3, 'a'), (1, 'c'), (2, 'b'), (4, 'd')])
    }

    #[test]
    fn left_iter_meets_in_the_middle() {
        let map = sample();
        let mut iter = map.iter_left();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some((&1, &'c')));
        assert_eq!(iter.next_back(), Some((&4, &'d')));
        assert_eq!(iter.next_back(), Some((&3, &'a')));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some((&2, &'b')));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn right_iter_in_right_order() {
        let map = sample();
        let rights: Vec<char> = map.iter_right().map(|(_, r)| *r).collect();
        assert_eq!(rights, ['a', 'b', 'c', 'd']);
        let lefts: Vec<u32> = map.iter_right().rev().map(|(l, _)| *l).collect();
        assert_eq!(lefts, [4, 1, 2, 3]);
    }

    #[test]
    fn values_iterators() {
        let map = sample();
        assert_eq!(map.left_values().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
        assert_eq!(map.right_values().copied().collect::<Vec<_>>(), ['a', 'b', 'c', 'd']);
        assert_eq!(map.right_values().len(), 4);
    }

    #[test]
    fn empty_iterators() {
        let map: BiMap<u32, u32> = BiMap::new();
        assert_eq!(map.iter_left().next(), None);
        assert_eq!(map.iter_right().next_back(), None);
        assert_eq!(map.left_values().count(), 0);
    }

    #[test]
    fn clone_is_independent() {
        let map = sample();
        let mut iter = map.iter_left();
        iter.next();
        let snapshot = iter.clone();
        iter.next();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn debug_lists_remaining_items() {
        let map = BiMap::from([(1, 'x'), (2, 'y')]);
        let mut iter = map.left_values();
        iter.next();
        assert_eq!(format!("{iter:?}"), "[2]");
        assert_eq!(format!("{:?}", map.iter_right()), "[(1, 'x'), (2, 'y')]");
    }
}
