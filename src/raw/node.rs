use super::handle::Handle;
use super::priority::Priority;

/// One side's view of a node: that side's value and that side's tree links.
///
/// `value` is `None` only for the sentinel. `parent` is a plain back-link used for
/// successor/predecessor walks; it owns nothing.
pub(crate) struct Facet<T> {
    value: Option<T>,
    lesser: Option<Handle>,
    greater: Option<Handle>,
    parent: Option<Handle>,
}

impl<T> Facet<T> {
    const fn new(value: Option<T>) -> Self {
        Self {
            value,
            lesser: None,
            greater: None,
            parent: None,
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[inline]
    pub(crate) fn lesser(&self) -> Option<Handle> {
        self.lesser
    }

    #[inline]
    pub(crate) fn greater(&self) -> Option<Handle> {
        self.greater
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) fn set_lesser(&mut self, child: Option<Handle>) {
        self.lesser = child;
    }

    #[inline]
    pub(crate) fn set_greater(&mut self, child: Option<Handle>) {
        self.greater = child;
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }
}

/// A stored pair: one arena slot that is a node of the left tree and a node of the right
/// tree at the same time. Both facets share the priority and are dropped together.
pub(crate) struct DualNode<L, R> {
    priority: Priority,
    left: Facet<L>,
    right: Facet<R>,
}

impl<L, R> DualNode<L, R> {
    pub(crate) const fn new(left: L, right: R, priority: Priority) -> Self {
        Self {
            priority,
            left: Facet::new(Some(left)),
            right: Facet::new(Some(right)),
        }
    }

    /// The valueless terminal node shared by both trees.
    pub(crate) const fn sentinel(priority: Priority) -> Self {
        Self {
            priority,
            left: Facet::new(None),
            right: Facet::new(None),
        }
    }

    #[inline]
    pub(crate) fn priority(&self) -> Priority {
        self.priority
    }

    pub(crate) fn is_sentinel(&self) -> bool {
        self.left.value.is_none()
    }

    /// Returns both values, or `None` for the sentinel.
    pub(crate) fn pair(&self) -> Option<(&L, &R)> {
        Some((self.left.value.as_ref()?, self.right.value.as_ref()?))
    }

    pub(crate) fn into_pair(self) -> Option<(L, R)> {
        Some((self.left.value?, self.right.value?))
    }
}

/// Selects which facet of a `DualNode` a tree is built from.
pub(crate) trait Axis<L, R> {
    type Value;

    fn facet(node: &DualNode<L, R>) -> &Facet<Self::Value>;

    fn facet_mut(node: &mut DualNode<L, R>) -> &mut Facet<Self::Value>;
}

/// The facet ordered by left values.
pub(crate) enum LeftAxis {}

/// The facet ordered by right values.
pub(crate) enum RightAxis {}

impl<L, R> Axis<L, R> for LeftAxis {
    type Value = L;

    #[inline]
    fn facet(node: &DualNode<L, R>) -> &Facet<L> {
        &node.left
    }

    #[inline]
    fn facet_mut(node: &mut DualNode<L, R>) -> &mut Facet<L> {
        &mut node.left
    }
}

impl<L, R> Axis<L, R> for RightAxis {
    type Value = R;

    #[inline]
    fn facet(node: &DualNode<L, R>) -> &Facet<R> {
        &node.right
    }

    #[inline]
    fn facet_mut(node: &mut DualNode<L, R>) -> &mut Facet<R> {
        &mut node.right
    }
}
