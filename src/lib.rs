//! Ordered bidirectional maps for Rust.
//!
//! This crate provides [`BiMap`], a one-to-one map between two ordered sets of values.
//! Every pair can be looked up, inserted or erased through either of its values in
//! expected O(log n) time, and both sides can be traversed in sorted order.
//!
//! - [`find_left`](BiMap::find_left) / [`find_right`](BiMap::find_right) - Locate a pair
//!   by either of its values
//! - [`flip`](LeftPos::flip) - Jump from a pair's position in one ordering to its
//!   position in the other ordering in O(1)
//! - [`erase_left_range`](BiMap::erase_left_range) - Remove a sorted run of pairs from
//!   both orderings at once
//!
//! # Example
//!
//! ```
//! use bitreap::{BiMap, BiMapError};
//!
//! let mut codes = BiMap::new();
//! codes.insert("Austria", 43);
//! codes.insert("Brazil", 55);
//! codes.insert("Chile", 56);
//!
//! // Look up by either side
//! assert_eq!(codes.at_left(&"Brazil"), Ok(&55));
//! assert_eq!(codes.at_right(&56), Ok(&"Chile"));
//! assert_eq!(codes.at_right(&1), Err(BiMapError::RightKeyNotFound));
//!
//! // A left position flips to the same pair's right position
//! let pos = codes.find_left(&"Austria").flip();
//! assert_eq!(codes.right_value(pos), &43);
//! assert_eq!(codes.right_value(codes.next_right(pos)), &55);
//!
//! // Erasing through one side removes the pair from both
//! assert!(codes.erase_right(&55));
//! assert!(!codes.contains_left(&"Brazil"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Custom orderings** - Each side takes its own [`Compare`] implementation,
//!   including plain closures
//! - **Stable positions** - [`LeftPos`] and [`RightPos`] survive insertions and erasure
//!   of other pairs
//! - **Reproducible shape** - Node priorities come from a per-map seeded generator
//!   ([`BiMap::with_seed`])
//!
//! # Implementation
//!
//! Pairs live in a single pool of nodes. Each node carries two sets of tree links, one per
//! side, and takes part in two treaps (randomized balanced binary search trees) at once.
//! Both treaps end in the same valueless sentinel node, which serves as the end position
//! of both orderings. Nodes point at their parents, so stepping through either ordering
//! needs no auxiliary stack.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod raw;

pub mod bimap;

pub use bimap::{BiMap, LeftPos, RightPos};
pub use compare::{Compare, Descending, Natural};
pub use error::BiMapError;
pub use raw::DEFAULT_SEED;
