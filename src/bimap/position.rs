use super::BiMap;
use crate::compare::Compare;
use crate::raw::Handle;

/// A position in the left ordering of a [`BiMap`].
///
/// Positions are plain copyable tokens; every operation on them goes through the map
/// they came from. Using a position with a map other than the one that produced it, or
/// after its pair has been erased, is a logic error: it may panic or refer to an
/// unrelated pair, but it never causes undefined behavior.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LeftPos(pub(crate) Handle);

/// A position in the right ordering of a [`BiMap`].
///
/// See [`LeftPos`] for the validity rules.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RightPos(pub(crate) Handle);

impl LeftPos {
    /// Returns the position of the same pair in the right ordering.
    ///
    /// The end position flips to the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::new();
    /// map.insert(1, 'c');
    /// map.insert(2, 'a');
    /// map.insert(3, 'b');
    ///
    /// let pos = map.find_left(&2);
    /// let across = pos.flip();
    /// assert_eq!(map.right_value(across), &'a');
    /// assert_eq!(map.left_value(map.next_right(across).flip()), &3);
    /// assert_eq!(across.flip(), pos);
    /// assert_eq!(map.end_left().flip(), map.end_right());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn flip(self) -> RightPos {
        RightPos(self.0)
    }
}

impl RightPos {
    /// Returns the position of the same pair in the left ordering.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn flip(self) -> LeftPos {
        LeftPos(self.0)
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR> {
    /// Position of the pair with the smallest left value, or [`end_left`](BiMap::end_left)
    /// if the map is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn begin_left(&self) -> LeftPos {
        LeftPos(self.raw.begin_left())
    }

    /// The past-the-end position of the left ordering.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn end_left(&self) -> LeftPos {
        LeftPos(self.raw.end_left())
    }

    /// Position of the pair with the smallest right value, or
    /// [`end_right`](BiMap::end_right) if the map is empty.
    #[must_use]
    pub fn begin_right(&self) -> RightPos {
        RightPos(self.raw.begin_right())
    }

    /// The past-the-end position of the right ordering.
    #[must_use]
    pub fn end_right(&self) -> RightPos {
        RightPos(self.raw.end_right())
    }

    /// Steps to the following position in left order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position.
    ///
    /// # Complexity
    ///
    /// O(log n) worst case, O(1) amortized over a full traversal.
    #[must_use]
    pub fn next_left(&self, pos: LeftPos) -> LeftPos {
        LeftPos(self.raw.next_left(pos.0))
    }

    /// Steps to the preceding position in left order. Stepping back from the end position
    /// gives the last pair.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the first position (this includes the end position of an empty
    /// map).
    #[must_use]
    pub fn prev_left(&self, pos: LeftPos) -> LeftPos {
        LeftPos(self.raw.prev_left(pos.0))
    }

    /// Steps to the following position in right order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position.
    #[must_use]
    pub fn next_right(&self, pos: RightPos) -> RightPos {
        RightPos(self.raw.next_right(pos.0))
    }

    /// Steps to the preceding position in right order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the first position.
    #[must_use]
    pub fn prev_right(&self, pos: RightPos) -> RightPos {
        RightPos(self.raw.prev_right(pos.0))
    }

    /// The pair at a left position, or `None` at the end position.
    pub fn get_left_at(&self, pos: LeftPos) -> Option<(&L, &R)> {
        self.raw.pair(pos.0)
    }

    /// The pair at a right position, or `None` at the end position.
    pub fn get_right_at(&self, pos: RightPos) -> Option<(&L, &R)> {
        self.raw.pair(pos.0)
    }

    /// The left value at a left position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position.
    pub fn left_value(&self, pos: LeftPos) -> &L {
        match self.raw.pair(pos.0) {
            Some((left, _)) => left,
            None => panic!("`BiMap::left_value()` - cannot dereference the end position"),
        }
    }

    /// The right value at a right position.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position.
    pub fn right_value(&self, pos: RightPos) -> &R {
        match self.raw.pair(pos.0) {
            Some((_, right)) => right,
            None => panic!("`BiMap::right_value()` - cannot dereference the end position"),
        }
    }
}

impl<L, R, CL, CR> BiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    /// Position of the pair whose left value is equivalent to `left`, or the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let map = BiMap::from([(1, 'a'), (2, 'b')]);
    /// let pos = map.find_left(&2);
    /// assert_eq!(map.get_left_at(pos), Some((&2, &'b')));
    /// assert_eq!(map.find_left(&7), map.end_left());
    /// ```
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn find_left(&self, left: &L) -> LeftPos {
        LeftPos(self.raw.find_left(left).unwrap_or_else(|| self.raw.end_left()))
    }

    /// Position of the pair whose right value is equivalent to `right`, or the end
    /// position.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn find_right(&self, right: &R) -> RightPos {
        RightPos(self.raw.find_right(right).unwrap_or_else(|| self.raw.end_right()))
    }

    /// First left position whose value is not less than `left`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let map = BiMap::from([(10, 'a'), (20, 'b'), (30, 'c')]);
    /// assert_eq!(map.left_value(map.lower_bound_left(&20)), &20);
    /// assert_eq!(map.left_value(map.upper_bound_left(&20)), &30);
    /// assert_eq!(map.left_value(map.lower_bound_left(&15)), &20);
    /// assert_eq!(map.lower_bound_left(&31), map.end_left());
    /// ```
    pub fn lower_bound_left(&self, left: &L) -> LeftPos {
        LeftPos(self.raw.lower_bound_left(left))
    }

    /// First left position whose value is greater than `left`.
    pub fn upper_bound_left(&self, left: &L) -> LeftPos {
        LeftPos(self.raw.upper_bound_left(left))
    }

    /// First right position whose value is not less than `right`.
    pub fn lower_bound_right(&self, right: &R) -> RightPos {
        RightPos(self.raw.lower_bound_right(right))
    }

    /// First right position whose value is greater than `right`.
    pub fn upper_bound_right(&self, right: &R) -> RightPos {
        RightPos(self.raw.upper_bound_right(right))
    }

    /// Erases the pair at a left position and returns the position that followed it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    pub fn erase_left_at(&mut self, pos: LeftPos) -> LeftPos {
        let following = self.raw.next_left(pos.0);
        self.raw.erase(pos.0);
        LeftPos(following)
    }

    /// Erases the pair at a right position and returns the position that followed it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is the end position.
    pub fn erase_right_at(&mut self, pos: RightPos) -> RightPos {
        let following = self.raw.next_right(pos.0);
        self.raw.erase(pos.0);
        RightPos(following)
    }

    /// Erases every pair in the left-ordered range `[first, last)` and returns `last`.
    ///
    /// The erased pairs also leave the right ordering.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitreap::BiMap;
    ///
    /// let mut map = BiMap::from([(1, 'd'), (2, 'c'), (3, 'b'), (4, 'a')]);
    /// let first = map.find_left(&2);
    /// let last = map.find_left(&4);
    /// assert_eq!(map.erase_left_range(first, last), last);
    /// assert_eq!(map.left_values().copied().collect::<Vec<_>>(), [1, 4]);
    /// assert_eq!(map.right_values().copied().collect::<Vec<_>>(), ['a', 'd']);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `last` cannot be reached from `first` by stepping forward. The map is
    /// left untouched in that case.
    ///
    /// # Complexity
    ///
    /// O(k log n) for k erased pairs.
    pub fn erase_left_range(&mut self, first: LeftPos, last: LeftPos) -> LeftPos {
        self.raw.erase_left_range(first.0, last.0);
        last
    }

    /// Erases every pair in the right-ordered range `[first, last)` and returns `last`.
    ///
    /// # Panics
    ///
    /// Panics if `last` cannot be reached from `first` by stepping forward.
    pub fn erase_right_range(&mut self, first: RightPos, last: RightPos) -> RightPos {
        self.raw.erase_right_range(first.0, last.0);
        last
    }
}
