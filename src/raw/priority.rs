use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Seed used by containers that are not given one explicitly.
pub const DEFAULT_SEED: u64 = 0x5EED_B1_7EA9;

/// Heap key of a node. Assigned once when the node is created and never changed.
///
/// Collisions are possible; the treap only relies on them for the orientation of a merge,
/// never for correctness.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) struct Priority(u32);

impl Priority {
    #[cfg(test)]
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

/// Per-container generator of node priorities.
#[derive(Clone, Debug)]
pub(crate) struct PrioritySource {
    rng: SmallRng,
}

impl PrioritySource {
    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn next_priority(&mut self) -> Priority {
        Priority(self.rng.next_u32())
    }
}

impl Default for PrioritySource {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}
