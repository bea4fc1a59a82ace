use log::trace;
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Axis, DualNode, LeftAxis, RightAxis};
use super::priority::PrioritySource;
use super::treap;
use super::treap::Treap;
use crate::compare::Compare;

/// The core dual-treap implementation backing `BiMap`.
///
/// Every pair lives in exactly one arena slot. That slot is linked into the left tree
/// through its left facet and into the right tree through its right facet; a slot is in
/// both trees or in neither. The sentinel occupies one extra slot for the whole lifetime
/// of the map.
pub(crate) struct RawBiMap<L, R, CL, CR> {
    /// Arena owning all nodes, sentinel included.
    nodes: Arena<DualNode<L, R>>,
    /// Index ordered by left values.
    left: Treap<L, R, LeftAxis, CL>,
    /// Index ordered by right values.
    right: Treap<L, R, RightAxis, CR>,
    priorities: PrioritySource,
    /// Number of stored pairs.
    len: usize,
}

/// Stack used to walk a detached subtree; typical ranges fit inline.
type Doomed = SmallVec<[Handle; 32]>;

impl<L, R, CL, CR> RawBiMap<L, R, CL, CR> {
    /// Creates an empty map: an arena holding only the sentinel, shared by both trees.
    pub(crate) fn new(left_cmp: CL, right_cmp: CR, seed: u64, capacity: usize) -> Self {
        Self::with_priorities(left_cmp, right_cmp, PrioritySource::seeded(seed), capacity)
    }

    fn with_priorities(left_cmp: CL, right_cmp: CR, mut priorities: PrioritySource, capacity: usize) -> Self {
        let mut nodes = Arena::with_capacity(capacity.saturating_add(1));
        let end = nodes.insert(DualNode::sentinel(priorities.next_priority()));
        Self {
            nodes,
            left: Treap::new(end, left_cmp),
            right: Treap::new(end, right_cmp),
            priorities,
            len: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Number of pairs the arena can hold without reallocating.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity().saturating_sub(1)
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn left_comparator(&self) -> &CL {
        self.left.comparator()
    }

    pub(crate) fn right_comparator(&self) -> &CR {
        self.right.comparator()
    }

    /// Drops every pair and the old sentinel, then installs a fresh sentinel.
    pub(crate) fn clear(&mut self) {
        trace!("clearing bimap of {} pairs", self.len);
        self.nodes.clear();
        let end = self.nodes.insert(DualNode::sentinel(self.priorities.next_priority()));
        self.left.reset(end);
        self.right.reset(end);
        self.len = 0;
    }

    /// Exchanges contents with `other` in O(1).
    pub(crate) fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.nodes, &mut other.nodes);
        self.left.swap(&mut other.left);
        self.right.swap(&mut other.right);
        core::mem::swap(&mut self.priorities, &mut other.priorities);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    pub(crate) fn begin_left(&self) -> Handle {
        self.left.begin()
    }

    pub(crate) fn end_left(&self) -> Handle {
        self.left.end()
    }

    pub(crate) fn begin_right(&self) -> Handle {
        self.right.begin()
    }

    pub(crate) fn end_right(&self) -> Handle {
        self.right.end()
    }

    pub(crate) fn next_left(&self, handle: Handle) -> Handle {
        treap::next::<L, R, LeftAxis>(&self.nodes, handle)
    }

    pub(crate) fn prev_left(&self, handle: Handle) -> Handle {
        treap::prev::<L, R, LeftAxis>(&self.nodes, handle)
    }

    pub(crate) fn next_right(&self, handle: Handle) -> Handle {
        treap::next::<L, R, RightAxis>(&self.nodes, handle)
    }

    pub(crate) fn prev_right(&self, handle: Handle) -> Handle {
        treap::prev::<L, R, RightAxis>(&self.nodes, handle)
    }

    /// Both values of the node at `handle`, or `None` for the sentinel.
    pub(crate) fn pair(&self, handle: Handle) -> Option<(&L, &R)> {
        self.nodes.get(handle).pair()
    }

    /// Removes every node of the subtree rooted at `root`, walking it through facet `A`.
    /// The nodes must already be unlinked from the other tree.
    fn free_subtree<A: Axis<L, R>>(&mut self, root: Option<Handle>) -> usize {
        let mut pending: Doomed = root.into_iter().collect();
        let mut freed = 0;
        while let Some(handle) = pending.pop() {
            let node = A::facet(self.nodes.get(handle));
            pending.extend([node.lesser(), node.greater()].into_iter().flatten());
            let node = self.nodes.remove(handle);
            debug_assert!(!node.is_sentinel(), "`RawBiMap::free_subtree()` - reached the sentinel");
            freed += 1;
        }
        freed
    }
}

impl<L, R, CL, CR> RawBiMap<L, R, CL, CR>
where
    CL: Compare<L>,
    CR: Compare<R>,
{
    pub(crate) fn find_left(&self, left: &L) -> Option<Handle> {
        self.left.find(&self.nodes, left)
    }

    pub(crate) fn find_right(&self, right: &R) -> Option<Handle> {
        self.right.find(&self.nodes, right)
    }

    pub(crate) fn lower_bound_left(&self, left: &L) -> Handle {
        self.left.lower_bound(&self.nodes, left)
    }

    pub(crate) fn upper_bound_left(&self, left: &L) -> Handle {
        self.left.upper_bound(&self.nodes, left)
    }

    pub(crate) fn lower_bound_right(&self, right: &R) -> Handle {
        self.right.lower_bound(&self.nodes, right)
    }

    pub(crate) fn upper_bound_right(&self, right: &R) -> Handle {
        self.right.upper_bound(&self.nodes, right)
    }

    /// Stores a new pair. A pair whose left or right value is already present is rejected
    /// and handed back unchanged.
    pub(crate) fn insert(&mut self, left: L, right: R) -> Result<Handle, (L, R)> {
        if self.find_left(&left).is_some() || self.find_right(&right).is_some() {
            trace!("rejected pair: duplicate left or right value");
            return Err((left, right));
        }

        let handle = self.nodes.insert(DualNode::new(left, right, self.priorities.next_priority()));
        self.left.insert(&mut self.nodes, handle);
        self.right.insert(&mut self.nodes, handle);
        self.len += 1;
        Ok(handle)
    }

    /// Unlinks the pair at `handle` from both trees and destroys its node.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is the end position.
    pub(crate) fn erase(&mut self, handle: Handle) -> (L, R) {
        assert!(handle != self.left.end(), "`RawBiMap::erase()` - cannot erase the end position");
        self.left.erase(&mut self.nodes, handle);
        self.right.erase(&mut self.nodes, handle);
        self.len -= 1;
        self.nodes
            .remove(handle)
            .into_pair()
            .expect("`RawBiMap::erase()` - valued node lost its pair")
    }

    /// Erases every pair in the left-ordered range `[first, last)`; returns how many.
    pub(crate) fn erase_left_range(&mut self, first: Handle, last: Handle) -> usize {
        let doomed = self.collect_range(first, last, Self::next_left);
        for &handle in &doomed {
            // Their right positions are scattered, so they leave the right tree one by one.
            self.right.erase(&mut self.nodes, handle);
        }
        let detached = self.left.erase_range(&mut self.nodes, first, last);
        self.finish_range_erase::<LeftAxis>(detached, doomed.len())
    }

    /// Erases every pair in the right-ordered range `[first, last)`; returns how many.
    pub(crate) fn erase_right_range(&mut self, first: Handle, last: Handle) -> usize {
        let doomed = self.collect_range(first, last, Self::next_right);
        for &handle in &doomed {
            self.left.erase(&mut self.nodes, handle);
        }
        let detached = self.right.erase_range(&mut self.nodes, first, last);
        self.finish_range_erase::<RightAxis>(detached, doomed.len())
    }

    /// Walks `[first, last)` before anything is mutated, so a malformed range fails
    /// without leaving the trees out of step.
    fn collect_range(&self, first: Handle, last: Handle, step: fn(&Self, Handle) -> Handle) -> Doomed {
        let end = self.left.end();
        let mut doomed = Doomed::new();
        let mut cursor = first;
        while cursor != last {
            assert!(cursor != end, "`RawBiMap::erase_range()` - `last` does not follow `first`");
            doomed.push(cursor);
            cursor = step(self, cursor);
        }
        doomed
    }

    fn finish_range_erase<A: Axis<L, R>>(&mut self, detached: Option<Handle>, expected: usize) -> usize {
        let freed = self.free_subtree::<A>(detached);
        debug_assert_eq!(freed, expected, "`RawBiMap::erase_range()` - detached subtree size mismatch");
        self.len -= freed;
        trace!("erased range of {freed} pairs");
        freed
    }
}

impl<L, R, CL, CR> Clone for RawBiMap<L, R, CL, CR>
where
    L: Clone,
    R: Clone,
    CL: Clone + Compare<L>,
    CR: Clone + Compare<R>,
{
    /// Rebuilds the copy by re-inserting every pair in left order.
    fn clone(&self) -> Self {
        let mut copy = Self::with_priorities(
            self.left.comparator().clone(),
            self.right.comparator().clone(),
            self.priorities.clone(),
            self.len,
        );

        let mut cursor = self.begin_left();
        while cursor != self.end_left() {
            if let Some((left, right)) = self.pair(cursor) {
                let inserted = copy.insert(left.clone(), right.clone());
                debug_assert!(inserted.is_ok(), "`RawBiMap::clone()` - source held a duplicate");
            }
            cursor = self.next_left(cursor);
        }
        copy
    }
}
