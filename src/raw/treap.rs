use core::marker::PhantomData;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Axis, DualNode, Facet};
use crate::compare::Compare;

type Nodes<L, R> = Arena<DualNode<L, R>>;

/// How `split` partitions a tree around a boundary value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum SplitMode {
    /// Lower half holds values strictly less than the boundary.
    Less,
    /// Lower half holds values less than or equivalent to the boundary.
    LessOrEqual,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum BoundMode {
    /// First value not less than the probe.
    Lower,
    /// First value strictly greater than the probe.
    Upper,
}

/// One ordered index over the shared node arena, read through the facet chosen by `A`.
///
/// The treap only rearranges links. Nodes are created and destroyed by the arena's owner;
/// `erase` and `erase_range` hand the unlinked nodes back instead of freeing them.
///
/// The sentinel (`end`) is permanently in the tree and is always the last in-order node,
/// so `root` is never empty.
pub(crate) struct Treap<L, R, A, C> {
    root: Handle,
    /// Leftmost valued node, or `end` when the tree holds no pairs.
    begin: Handle,
    end: Handle,
    cmp: C,
    _axis: PhantomData<fn() -> (L, R, A)>,
}

#[inline]
fn facet<L, R, A: Axis<L, R>>(nodes: &Nodes<L, R>, handle: Handle) -> &Facet<A::Value> {
    A::facet(nodes.get(handle))
}

#[inline]
fn facet_mut<L, R, A: Axis<L, R>>(nodes: &mut Nodes<L, R>, handle: Handle) -> &mut Facet<A::Value> {
    A::facet_mut(nodes.get_mut(handle))
}

/// In-order successor of `handle` on axis `A`.
///
/// # Panics
///
/// Panics if `handle` is the sentinel: nothing follows the end position.
pub(crate) fn next<L, R, A: Axis<L, R>>(nodes: &Nodes<L, R>, handle: Handle) -> Handle {
    let node = facet::<L, R, A>(nodes, handle);
    assert!(node.value().is_some(), "`treap::next()` - cannot advance past the end position");

    if let Some(mut current) = node.greater() {
        while let Some(lesser) = facet::<L, R, A>(nodes, current).lesser() {
            current = lesser;
        }
        return current;
    }

    // Climb until we arrive from a lesser edge. The sentinel is greater than every valued
    // node, so such an ancestor always exists.
    let mut current = handle;
    loop {
        let parent = facet::<L, R, A>(nodes, current)
            .parent()
            .expect("`treap::next()` - valued node without a greater ancestor");
        if facet::<L, R, A>(nodes, parent).lesser() == Some(current) {
            return parent;
        }
        current = parent;
    }
}

/// In-order predecessor of `handle` on axis `A`.
///
/// # Panics
///
/// Panics if `handle` is the first position of the tree.
pub(crate) fn prev<L, R, A: Axis<L, R>>(nodes: &Nodes<L, R>, handle: Handle) -> Handle {
    if let Some(mut current) = facet::<L, R, A>(nodes, handle).lesser() {
        while let Some(greater) = facet::<L, R, A>(nodes, current).greater() {
            current = greater;
        }
        return current;
    }

    let mut current = handle;
    loop {
        let parent = facet::<L, R, A>(nodes, current)
            .parent()
            .expect("`treap::prev()` - cannot retreat before the first position");
        if facet::<L, R, A>(nodes, parent).greater() == Some(current) {
            return parent;
        }
        current = parent;
    }
}

impl<L, R, A, C> Treap<L, R, A, C> {
    /// Creates a tree holding only the sentinel `end`.
    pub(crate) const fn new(end: Handle, cmp: C) -> Self {
        Self {
            root: end,
            begin: end,
            end,
            cmp,
            _axis: PhantomData,
        }
    }

    /// Forgets every node and starts over from a fresh sentinel.
    pub(crate) fn reset(&mut self, end: Handle) {
        self.root = end;
        self.begin = end;
        self.end = end;
    }

    #[inline]
    pub(crate) fn begin(&self) -> Handle {
        self.begin
    }

    #[inline]
    pub(crate) fn end(&self) -> Handle {
        self.end
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Exchanges the whole tree, comparator included, in O(1).
    pub(crate) fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> Handle {
        self.root
    }
}

impl<L, R, A, C> Treap<L, R, A, C>
where
    A: Axis<L, R>,
    C: Compare<A::Value>,
{
    #[inline]
    fn value(nodes: &Nodes<L, R>, handle: Handle) -> Option<&A::Value> {
        facet::<L, R, A>(nodes, handle).value()
    }

    /// Finds the node whose value is equivalent to `value`.
    pub(crate) fn find(&self, nodes: &Nodes<L, R>, value: &A::Value) -> Option<Handle> {
        let mut current = Some(self.root);
        while let Some(handle) = current {
            let node = facet::<L, R, A>(nodes, handle);
            current = match node.value() {
                Some(stored) if self.cmp.less(value, stored) => node.lesser(),
                Some(stored) if self.cmp.less(stored, value) => node.greater(),
                Some(_) => return Some(handle),
                None => node.lesser(),
            };
        }
        None
    }

    /// Links the (detached, valued) node `handle` into the tree.
    ///
    /// The caller guarantees no equivalent value is already present.
    pub(crate) fn insert(&mut self, nodes: &mut Nodes<L, R>, handle: Handle) {
        let becomes_first = match (Self::value(nodes, handle), Self::value(nodes, self.begin)) {
            (Some(new), Some(first)) => self.cmp.less(new, first),
            _ => true,
        };
        if becomes_first {
            self.begin = handle;
        }

        let (lower, upper) = self.split(nodes, Some(self.root), handle, SplitMode::Less);
        let lower = Self::merge(nodes, lower, Some(handle));
        let root = Self::merge(nodes, lower, upper);
        self.install_root(nodes, root);
    }

    /// Unlinks the valued node `handle` from the tree. The node itself stays allocated.
    pub(crate) fn erase(&mut self, nodes: &mut Nodes<L, R>, handle: Handle) {
        // Must run while the parent links around `handle` are still intact.
        if self.begin == handle {
            self.begin = next::<L, R, A>(nodes, handle);
        }

        let (lower, rest) = self.split(nodes, Some(self.root), handle, SplitMode::Less);
        let (isolated, upper) = self.split(nodes, rest, handle, SplitMode::LessOrEqual);
        debug_assert_eq!(isolated, Some(handle), "`Treap::erase()` - node is not in this tree");

        let root = Self::merge(nodes, lower, upper);
        self.install_root(nodes, root);

        let node = facet_mut::<L, R, A>(nodes, handle);
        node.set_lesser(None);
        node.set_greater(None);
        node.set_parent(None);
    }

    /// Unlinks every node in `[first, last)` at once and returns the root of the detached
    /// subtree, or `None` for an empty range.
    ///
    /// `first` must not follow `last`.
    pub(crate) fn erase_range(&mut self, nodes: &mut Nodes<L, R>, first: Handle, last: Handle) -> Option<Handle> {
        if first == last {
            return None;
        }
        if self.begin == first {
            self.begin = last;
        }

        let (lower, rest) = self.split(nodes, Some(self.root), first, SplitMode::Less);
        if last == self.end {
            let detached = self.detach_end(nodes, rest);
            let root = Self::merge(nodes, lower, Some(self.end));
            self.install_root(nodes, root);
            detached
        } else {
            let (detached, upper) = self.split(nodes, rest, last, SplitMode::Less);
            let root = Self::merge(nodes, lower, upper);
            self.install_root(nodes, root);
            detached
        }
    }

    /// First position whose value is not less than `value`; `end` if there is none.
    pub(crate) fn lower_bound(&self, nodes: &Nodes<L, R>, value: &A::Value) -> Handle {
        self.bound(nodes, value, BoundMode::Lower)
    }

    /// First position whose value is greater than `value`; `end` if there is none.
    pub(crate) fn upper_bound(&self, nodes: &Nodes<L, R>, value: &A::Value) -> Handle {
        self.bound(nodes, value, BoundMode::Upper)
    }

    fn bound(&self, nodes: &Nodes<L, R>, value: &A::Value, mode: BoundMode) -> Handle {
        let mut best = self.end;
        let mut current = Some(self.root);
        while let Some(handle) = current {
            let node = facet::<L, R, A>(nodes, handle);
            let candidate = match (node.value(), mode) {
                (None, _) => true,
                (Some(stored), BoundMode::Lower) => !self.cmp.less(stored, value),
                (Some(stored), BoundMode::Upper) => self.cmp.less(value, stored),
            };
            current = if candidate {
                best = handle;
                node.lesser()
            } else {
                node.greater()
            };
        }
        best
    }

    /// Partitions `tree` around the value held by `boundary`, keeping in-order order in
    /// both halves. Both returned roots have no parent.
    fn split(
        &self,
        nodes: &mut Nodes<L, R>,
        tree: Option<Handle>,
        boundary: Handle,
        mode: SplitMode,
    ) -> (Option<Handle>, Option<Handle>) {
        let Some(handle) = tree else {
            return (None, None);
        };
        Self::orphan_children(nodes, handle);

        let goes_lower = match Self::value(nodes, handle) {
            None => false,
            Some(stored) => {
                let key = Self::value(nodes, boundary).expect("`Treap::split()` - boundary is the sentinel");
                match mode {
                    SplitMode::Less => self.cmp.less(stored, key),
                    SplitMode::LessOrEqual => !self.cmp.less(key, stored),
                }
            }
        };

        if goes_lower {
            let greater = facet::<L, R, A>(nodes, handle).greater();
            let (lower, upper) = self.split(nodes, greater, boundary, mode);
            facet_mut::<L, R, A>(nodes, handle).set_greater(lower);
            Self::adopt_children(nodes, handle);
            (Some(handle), upper)
        } else {
            let lesser = facet::<L, R, A>(nodes, handle).lesser();
            let (lower, upper) = self.split(nodes, lesser, boundary, mode);
            facet_mut::<L, R, A>(nodes, handle).set_lesser(upper);
            Self::adopt_children(nodes, handle);
            (lower, Some(handle))
        }
    }

    /// Joins two trees where every value of `lower` precedes every value of `upper`.
    /// The smaller priority ends up on top.
    fn merge(nodes: &mut Nodes<L, R>, lower: Option<Handle>, upper: Option<Handle>) -> Option<Handle> {
        let (lower, upper) = match (lower, upper) {
            (None, tree) | (tree, None) => return tree,
            (Some(lower), Some(upper)) => (lower, upper),
        };

        if nodes.get(lower).priority() < nodes.get(upper).priority() {
            let greater = facet::<L, R, A>(nodes, lower).greater();
            let merged = Self::merge(nodes, greater, Some(upper));
            facet_mut::<L, R, A>(nodes, lower).set_greater(merged);
            Self::adopt_children(nodes, lower);
            Some(lower)
        } else {
            let lesser = facet::<L, R, A>(nodes, upper).lesser();
            let merged = Self::merge(nodes, Some(lower), lesser);
            facet_mut::<L, R, A>(nodes, upper).set_lesser(merged);
            Self::adopt_children(nodes, upper);
            Some(upper)
        }
    }

    /// Splices the sentinel out of `tree` (whose maximum it is) and returns what is left.
    fn detach_end(&self, nodes: &mut Nodes<L, R>, tree: Option<Handle>) -> Option<Handle> {
        let end = facet::<L, R, A>(nodes, self.end);
        debug_assert!(end.greater().is_none(), "`Treap::detach_end()` - sentinel has a greater child");
        let hoisted = end.lesser();
        let parent = end.parent();

        if let Some(child) = hoisted {
            facet_mut::<L, R, A>(nodes, child).set_parent(parent);
        }
        let remaining = match parent {
            // The sentinel is the maximum, so it can only hang off a greater edge.
            Some(parent) => {
                facet_mut::<L, R, A>(nodes, parent).set_greater(hoisted);
                tree
            }
            None => hoisted,
        };

        let end = facet_mut::<L, R, A>(nodes, self.end);
        end.set_lesser(None);
        end.set_parent(None);
        remaining
    }

    fn install_root(&mut self, nodes: &mut Nodes<L, R>, root: Option<Handle>) {
        let root = root.expect("`Treap` - the sentinel must stay in the tree");
        facet_mut::<L, R, A>(nodes, root).set_parent(None);
        self.root = root;
    }

    fn adopt_children(nodes: &mut Nodes<L, R>, handle: Handle) {
        Self::set_children_parent(nodes, handle, Some(handle));
    }

    fn orphan_children(nodes: &mut Nodes<L, R>, handle: Handle) {
        Self::set_children_parent(nodes, handle, None);
    }

    fn set_children_parent(nodes: &mut Nodes<L, R>, handle: Handle, parent: Option<Handle>) {
        let node = facet::<L, R, A>(nodes, handle);
        let (lesser, greater) = (node.lesser(), node.greater());
        for child in [lesser, greater].into_iter().flatten() {
            facet_mut::<L, R, A>(nodes, child).set_parent(parent);
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod tests {
    use super::*;
    use crate::compare::{Descending, Natural};
    use crate::raw::node::{LeftAxis, RightAxis};
    use crate::raw::priority::{Priority, PrioritySource};
    use alloc::vec::Vec;
    use proptest::prelude::*;

    impl<L, R, A, C> Treap<L, R, A, C>
    where
        A: Axis<L, R>,
        C: Compare<A::Value>,
    {
        /// Checks every structural invariant and returns the valued nodes in order.
        pub(crate) fn validate(&self, nodes: &Nodes<L, R>) -> Vec<Handle> {
            assert_eq!(facet::<L, R, A>(nodes, self.root).parent(), None, "root has a parent");

            let mut in_order = Vec::new();
            self.collect(nodes, self.root, &mut in_order);

            assert_eq!(in_order.last(), Some(&self.end), "sentinel is not the last position");
            let valued = &in_order[..in_order.len() - 1];
            for &handle in valued {
                assert!(Self::value(nodes, handle).is_some(), "second sentinel in the tree");
            }
            for pair in valued.windows(2) {
                let a = Self::value(nodes, pair[0]).unwrap();
                let b = Self::value(nodes, pair[1]).unwrap();
                assert!(self.cmp.less(a, b), "in-order sequence is not strictly increasing");
            }
            assert_eq!(self.begin, in_order[0], "cached begin is stale");
            assert_eq!(self.is_empty(), valued.is_empty());

            // Forward and backward walks must agree with the structural order.
            let mut cursor = self.begin;
            for &expected in &in_order {
                assert_eq!(cursor, expected, "successor walk diverged");
                if cursor != self.end {
                    cursor = next::<L, R, A>(nodes, cursor);
                }
            }
            let mut cursor = self.end;
            for &expected in valued.iter().rev() {
                cursor = prev::<L, R, A>(nodes, cursor);
                assert_eq!(cursor, expected, "predecessor walk diverged");
            }

            valued.to_vec()
        }

        fn collect(&self, nodes: &Nodes<L, R>, handle: Handle, out: &mut Vec<Handle>) {
            let node = facet::<L, R, A>(nodes, handle);
            let priority = nodes.get(handle).priority();
            for child in [node.lesser(), node.greater()].into_iter().flatten() {
                assert_eq!(facet::<L, R, A>(nodes, child).parent(), Some(handle), "broken parent link");
                assert!(priority <= nodes.get(child).priority(), "heap order violated");
            }
            if let Some(lesser) = node.lesser() {
                self.collect(nodes, lesser, out);
            }
            out.push(handle);
            if let Some(greater) = node.greater() {
                self.collect(nodes, greater, out);
            }
        }
    }

    /// A single left-ordered treap over `i32` values, with the right facet unused.
    struct Fixture<C> {
        nodes: Nodes<i32, ()>,
        treap: Treap<i32, (), LeftAxis, C>,
        priorities: PrioritySource,
    }

    impl<C: Compare<i32>> Fixture<C> {
        fn new(cmp: C) -> Self {
            let mut nodes = Arena::new();
            let end = nodes.insert(DualNode::sentinel(Priority::new(u32::MAX / 2)));
            Self {
                nodes,
                treap: Treap::new(end, cmp),
                priorities: PrioritySource::seeded(7),
            }
        }

        fn insert_with(&mut self, value: i32, priority: Priority) -> Handle {
            let handle = self.nodes.insert(DualNode::new(value, (), priority));
            self.treap.insert(&mut self.nodes, handle);
            handle
        }

        fn insert(&mut self, value: i32) -> Handle {
            let priority = self.priorities.next_priority();
            self.insert_with(value, priority)
        }

        fn values(&self) -> Vec<i32> {
            self.treap
                .validate(&self.nodes)
                .into_iter()
                .map(|handle| *LeftAxis::facet(self.nodes.get(handle)).value().unwrap())
                .collect()
        }

        fn value_at(&self, handle: Handle) -> Option<i32> {
            LeftAxis::facet(self.nodes.get(handle)).value().copied()
        }
    }

    #[test]
    fn empty_tree_is_just_the_sentinel() {
        let fixture = Fixture::new(Natural);
        assert!(fixture.treap.is_empty());
        assert_eq!(fixture.treap.begin(), fixture.treap.end());
        assert_eq!(fixture.treap.root(), fixture.treap.end());
        assert_eq!(fixture.treap.find(&fixture.nodes, &1), None);
        assert_eq!(fixture.treap.lower_bound(&fixture.nodes, &1), fixture.treap.end());
        assert!(fixture.values().is_empty());
    }

    #[test]
    fn insert_keeps_order_and_begin() {
        let mut fixture = Fixture::new(Natural);
        for value in [5, 3, 8, 1, 4, 9, 7] {
            fixture.insert(value);
        }
        assert_eq!(fixture.values(), [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(fixture.value_at(fixture.treap.begin()), Some(1));
    }

    #[test]
    fn comparator_drives_order() {
        let mut fixture = Fixture::new(Descending);
        for value in [2, 9, 4] {
            fixture.insert(value);
        }
        assert_eq!(fixture.values(), [9, 4, 2]);
    }

    #[test]
    fn equal_priorities_are_tolerated() {
        let mut fixture = Fixture::new(Natural);
        for value in [4, 2, 6, 1, 3, 5, 7] {
            fixture.insert_with(value, Priority::new(10));
        }
        assert_eq!(fixture.values(), [1, 2, 3, 4, 5, 6, 7]);
        let three = fixture.treap.find(&fixture.nodes, &3).unwrap();
        fixture.treap.erase(&mut fixture.nodes, three);
        assert_eq!(fixture.values(), [1, 2, 4, 5, 6, 7]);
    }

    #[test]
    fn sentinel_with_lowest_priority_is_root() {
        let mut fixture = Fixture::new(Natural);
        let end = fixture.treap.end();
        // Every valued node has a larger priority than the sentinel's.
        for value in [3, 1, 2] {
            fixture.insert_with(value, Priority::new(u32::MAX));
        }
        assert_eq!(fixture.treap.root(), end);
        assert_eq!(fixture.values(), [1, 2, 3]);
    }

    #[test]
    fn find_hits_and_misses() {
        let mut fixture = Fixture::new(Natural);
        let handles: Vec<Handle> = [10, 20, 30].into_iter().map(|v| fixture.insert(v)).collect();
        assert_eq!(fixture.treap.find(&fixture.nodes, &20), Some(handles[1]));
        assert_eq!(fixture.treap.find(&fixture.nodes, &25), None);
        assert_eq!(fixture.treap.find(&fixture.nodes, &5), None);
        assert_eq!(fixture.treap.find(&fixture.nodes, &35), None);
    }

    #[test]
    fn bounds() {
        let mut fixture = Fixture::new(Natural);
        for value in [10, 20, 30] {
            fixture.insert(value);
        }
        let nodes = &fixture.nodes;
        let treap = &fixture.treap;
        assert_eq!(fixture.value_at(treap.lower_bound(nodes, &20)), Some(20));
        assert_eq!(fixture.value_at(treap.upper_bound(nodes, &20)), Some(30));
        assert_eq!(fixture.value_at(treap.lower_bound(nodes, &15)), Some(20));
        assert_eq!(fixture.value_at(treap.upper_bound(nodes, &5)), Some(10));
        assert_eq!(treap.lower_bound(nodes, &31), treap.end());
        assert_eq!(treap.upper_bound(nodes, &30), treap.end());
    }

    #[test]
    fn erase_first_advances_begin() {
        let mut fixture = Fixture::new(Natural);
        let one = fixture.insert(1);
        let two = fixture.insert(2);
        fixture.treap.erase(&mut fixture.nodes, one);
        assert_eq!(fixture.treap.begin(), two);
        fixture.treap.erase(&mut fixture.nodes, two);
        assert!(fixture.treap.is_empty());
        assert!(fixture.values().is_empty());
    }

    #[test]
    fn erase_clears_links_of_the_removed_node() {
        let mut fixture = Fixture::new(Natural);
        for value in [1, 2, 3, 4, 5] {
            fixture.insert(value);
        }
        let three = fixture.treap.find(&fixture.nodes, &3).unwrap();
        fixture.treap.erase(&mut fixture.nodes, three);
        let node = LeftAxis::facet(fixture.nodes.get(three));
        assert_eq!((node.lesser(), node.greater(), node.parent()), (None, None, None));
        assert_eq!(fixture.values(), [1, 2, 4, 5]);
    }

    #[test]
    fn erase_range_in_the_middle() {
        let mut fixture = Fixture::new(Natural);
        let handles: Vec<Handle> = (0..10).map(|v| fixture.insert(v)).collect();
        let detached = fixture.treap.erase_range(&mut fixture.nodes, handles[3], handles[7]);
        assert!(detached.is_some());
        assert_eq!(fixture.values(), [0, 1, 2, 7, 8, 9]);
    }

    #[test]
    fn erase_range_to_end_keeps_sentinel() {
        let mut fixture = Fixture::new(Natural);
        let handles: Vec<Handle> = (0..10).map(|v| fixture.insert(v)).collect();
        let end = fixture.treap.end();
        fixture.treap.erase_range(&mut fixture.nodes, handles[4], end);
        assert_eq!(fixture.values(), [0, 1, 2, 3]);
        assert!(fixture.nodes.contains(end));
    }

    #[test]
    fn erase_range_everything() {
        let mut fixture = Fixture::new(Natural);
        let first = fixture.insert(1);
        fixture.insert(2);
        fixture.insert(3);
        let end = fixture.treap.end();
        fixture.treap.erase_range(&mut fixture.nodes, first, end);
        assert!(fixture.treap.is_empty());
        assert_eq!(fixture.treap.root(), end);
        assert!(fixture.values().is_empty());
    }

    #[test]
    fn erase_range_to_end_when_sentinel_is_subtree_root() {
        let mut fixture = Fixture::new(Natural);
        let end = fixture.treap.end();
        // Low values get low priorities: the sentinel ends up below them but above 3 and 4.
        let one = fixture.insert_with(1, Priority::new(1));
        fixture.insert_with(2, Priority::new(2));
        fixture.insert_with(3, Priority::new(u32::MAX - 1));
        fixture.insert_with(4, Priority::new(u32::MAX));
        let three = fixture.treap.find(&fixture.nodes, &3).unwrap();
        assert_eq!(LeftAxis::facet(fixture.nodes.get(three)).parent(), Some(end));

        let detached = fixture.treap.erase_range(&mut fixture.nodes, three, end);
        assert_eq!(detached, Some(three));
        assert_eq!(fixture.values(), [1, 2]);
        assert_eq!(fixture.treap.begin(), one);
    }

    #[test]
    fn empty_range_is_a_no_op() {
        let mut fixture = Fixture::new(Natural);
        let two = fixture.insert(2);
        assert_eq!(fixture.treap.erase_range(&mut fixture.nodes, two, two), None);
        assert_eq!(fixture.values(), [2]);
    }

    #[test]
    #[should_panic(expected = "`treap::next()` - cannot advance past the end position")]
    fn next_of_end_panics() {
        let fixture = Fixture::new(Natural);
        let _ = next::<i32, (), LeftAxis>(&fixture.nodes, fixture.treap.end());
    }

    #[test]
    #[should_panic(expected = "`treap::prev()` - cannot retreat before the first position")]
    fn prev_of_begin_panics() {
        let mut fixture = Fixture::new(Natural);
        fixture.insert(1);
        fixture.insert(2);
        let _ = prev::<i32, (), LeftAxis>(&fixture.nodes, fixture.treap.begin());
    }

    #[test]
    fn swap_exchanges_trees() {
        let mut a = Fixture::new(Natural);
        a.insert(1);
        let mut b_treap: Treap<i32, (), LeftAxis, Natural> = Treap::new(a.treap.end(), Natural);
        a.treap.swap(&mut b_treap);
        assert!(a.treap.is_empty());
        assert!(!b_treap.is_empty());
        assert_eq!(b_treap.validate(&a.nodes).len(), 1);
    }

    #[test]
    fn axes_share_nodes_but_not_links() {
        let mut nodes: Nodes<i32, char> = Arena::new();
        let end = nodes.insert(DualNode::sentinel(Priority::new(100)));
        let mut by_number: Treap<i32, char, LeftAxis, Natural> = Treap::new(end, Natural);
        let mut by_letter: Treap<i32, char, RightAxis, Natural> = Treap::new(end, Natural);
        let mut priorities = PrioritySource::seeded(3);
        for (number, letter) in [(1, 'c'), (2, 'b'), (3, 'a')] {
            let handle = nodes.insert(DualNode::new(number, letter, priorities.next_priority()));
            by_number.insert(&mut nodes, handle);
            by_letter.insert(&mut nodes, handle);
        }
        let numbers = by_number.validate(&nodes);
        let mut letters = by_letter.validate(&nodes);
        letters.reverse();
        assert_eq!(numbers, letters);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(i16),
        Erase(i16),
        EraseRange(i16, i16),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            6 => any::<i16>().prop_map(|v| Op::Insert(v % 64)),
            3 => any::<i16>().prop_map(|v| Op::Erase(v % 64)),
            1 => (any::<i16>(), any::<i16>()).prop_map(|(a, b)| Op::EraseRange(a % 64, b % 64)),
        ]
    }

    proptest! {
        #[test]
        fn random_ops_preserve_invariants(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut fixture = Fixture::new(Natural);
            let mut model: alloc::collections::BTreeSet<i32> = alloc::collections::BTreeSet::new();

            for op in ops {
                match op {
                    Op::Insert(v) => {
                        let v = i32::from(v);
                        if model.insert(v) {
                            fixture.insert(v);
                        }
                    }
                    Op::Erase(v) => {
                        let v = i32::from(v);
                        if model.remove(&v) {
                            let handle = fixture.treap.find(&fixture.nodes, &v).unwrap();
                            fixture.treap.erase(&mut fixture.nodes, handle);
                            fixture.nodes.remove(handle);
                        }
                    }
                    Op::EraseRange(a, b) => {
                        let (lo, hi) = (i32::from(a.min(b)), i32::from(a.max(b)));
                        let first = fixture.treap.lower_bound(&fixture.nodes, &lo);
                        let last = fixture.treap.lower_bound(&fixture.nodes, &hi);
                        let removed: Vec<i32> = model.range(lo..hi).copied().collect();
                        fixture.treap.erase_range(&mut fixture.nodes, first, last);
                        for v in removed {
                            model.remove(&v);
                        }
                    }
                }
                let expected: Vec<i32> = model.iter().copied().collect();
                prop_assert_eq!(fixture.values(), expected);
            }
        }
    }
}
