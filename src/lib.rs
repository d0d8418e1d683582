#![doc = include_str!("../README.md")]
#![cfg_attr(not(all(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]
#![deny(missing_docs)]
#![allow(clippy::type_complexity, rustdoc::bare_urls)]

#[cfg(not(feature = "std"))]
extern crate alloc as std;

#[cfg(feature = "std")]
extern crate std;

mod arena;
mod node;

mod list;
pub use list::{Iter, SkipList};

mod options;
pub use options::Options;

pub use rand;

/// The probability that a tower grows by one more level.
const PROBABILITY: f64 = 0.5;

/// The number of levels a walk can record without spilling to the heap.
///
/// With a fair coin, a list needs about `log2(n)` levels, so this covers
/// every practical list size.
const INLINE_LEVELS: usize = 32;
