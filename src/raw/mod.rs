mod arena;
mod handle;
mod node;
mod priority;
mod raw_bimap;
mod treap;

pub(crate) use handle::Handle;
pub use priority::DEFAULT_SEED;
pub(crate) use raw_bimap::RawBiMap;
