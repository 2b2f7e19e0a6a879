//! Byteclass compiles a set of byte values into the cheapest matcher which
//! decides, for any single byte, whether it belongs to that set.
//!
//! ## Key Features:
//!
//! - **Representation selection**: a set is checked against progressively
//!   more expensive encodings (single byte, case-insensitive letter, bitmask,
//!   contiguous range, sorted set, 256-bit table) and the first that
//!   reproduces it exactly is used.
//!
//! - **Inversion aware**: sets which contain almost every byte are matched
//!   through their small complement, so "everything but `\r` and `\n`" costs
//!   no more than matching two bytes.
//!
//! ```
//! use byteclass::{ByteMatch, ByteSet, MatcherKind, build};
//!
//! let set = ByteSet::from(0x80..=0xff);
//! let matcher = build(&set, false).unwrap();
//! assert_eq!(matcher.kind(), MatcherKind::AllBitmask);
//! assert_eq!(matcher.to_string(), "&80");
//! assert!(matcher.matches(0xc3));
//! assert!(!matcher.matches(b'a'));
//! ```

use thiserror::Error;

mod byteset;
pub mod classify;
mod factory;
pub mod matcher;
mod render;
mod util;

#[cfg(any(test, feature = "testutil"))]
pub mod testutil;

pub use byteset::{ByteSet, all_byte_values, bytes_in_range};
pub use factory::{DEFAULT_SET_THRESHOLD, MatcherFactory, SimpleMatcherFactory};
pub use matcher::{
    ByteMatch, ByteMatcher, MatcherKind,
    bitmask::{AllBitmaskMatcher, AnyBitmaskMatcher},
    range::RangeMatcher,
    set::{SetMatcher, TableMatcher},
    single::{AnyByteMatcher, CaseInsensitiveMatcher, InvertedByteMatcher, OneByteMatcher},
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BuildErr {
    #[error("Empty byte set passed to matcher factory")]
    EmptySet,
}

/// Builds the cheapest matcher for `bytes`, or for their complement when
/// `match_inverse` is true, using the default [`SimpleMatcherFactory`].
///
/// Returns [`BuildErr::EmptySet`] if `bytes` is empty.
///
/// ```
/// use byteclass::{BuildErr, ByteMatch, ByteSet, build};
///
/// let not_five = build(&ByteSet::from_iter([5]), true).unwrap();
/// assert_eq!(not_five.cardinality(), 255);
/// assert!(!not_five.matches(5));
///
/// assert_eq!(build(&ByteSet::EMPTY, false), Err(BuildErr::EmptySet));
/// ```
pub fn build(bytes: &ByteSet, match_inverse: bool) -> Result<ByteMatcher, BuildErr> {
    SimpleMatcherFactory::default().create(bytes, match_inverse)
}
