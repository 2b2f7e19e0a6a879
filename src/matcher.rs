use std::fmt::{self, Display};

use crate::MultiIter;

pub mod bitmask;
pub mod range;
pub mod set;
pub mod single;

use bitmask::{AllBitmaskMatcher, AnyBitmaskMatcher};
use range::RangeMatcher;
use set::{SetMatcher, TableMatcher};
use single::{AnyByteMatcher, CaseInsensitiveMatcher, InvertedByteMatcher, OneByteMatcher};

/// Read access shared by every single-byte matcher.
pub trait ByteMatch {
    /// returns true if the byte is matched
    fn matches(&self, byte: u8) -> bool;

    /// returns true if `position` is within `bytes` and the byte at that
    /// position is matched. Out of bounds positions never match.
    #[inline]
    fn matches_at(&self, bytes: &[u8], position: usize) -> bool {
        bytes.get(position).is_some_and(|&b| self.matches(b))
    }

    /// the number of byte values this matcher matches, between 0 and 256.
    fn cardinality(&self) -> usize;

    /// returns an iterator over every matched byte value in ascending order
    fn iter(&self) -> impl Iterator<Item = u8>;

    /// returns every matched byte value in ascending order
    fn matching_bytes(&self) -> Vec<u8> {
        self.iter().collect()
    }

    /// renders this matcher as a byte-class regular expression. In pretty
    /// mode printable ASCII values are shown as quoted characters.
    fn to_regular_expression(&self, pretty: bool) -> String;
}

/// Identifies which representation a [`ByteMatcher`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    One,
    InvertedOne,
    Any,
    CaseInsensitive,
    AllBitmask,
    AnyBitmask,
    Range,
    Set,
    Table,
}

/// A matcher for a single byte, in the cheapest representation that
/// reproduces its set exactly. Built by [`crate::build`].
///
/// ```
/// use byteclass::{ByteMatch, ByteSet, MatcherKind, build};
///
/// let digits = build(&ByteSet::from(b'0'..=b'9'), false).unwrap();
/// assert_eq!(digits.kind(), MatcherKind::Range);
/// assert!(digits.matches(b'7'));
/// assert!(!digits.matches(b'a'));
/// assert_eq!(digits.cardinality(), 10);
/// assert_eq!(digits.to_string(), "[30-39]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ByteMatcher {
    One(OneByteMatcher),
    InvertedOne(InvertedByteMatcher),
    Any(AnyByteMatcher),
    CaseInsensitive(CaseInsensitiveMatcher),
    AllBitmask(AllBitmaskMatcher),
    AnyBitmask(AnyBitmaskMatcher),
    Range(RangeMatcher),
    Set(SetMatcher),
    Table(TableMatcher),
}

static_assertions::assert_impl_all!(ByteMatcher: Send, Sync);

impl ByteMatcher {
    pub fn kind(&self) -> MatcherKind {
        match self {
            ByteMatcher::One(_) => MatcherKind::One,
            ByteMatcher::InvertedOne(_) => MatcherKind::InvertedOne,
            ByteMatcher::Any(_) => MatcherKind::Any,
            ByteMatcher::CaseInsensitive(_) => MatcherKind::CaseInsensitive,
            ByteMatcher::AllBitmask(_) => MatcherKind::AllBitmask,
            ByteMatcher::AnyBitmask(_) => MatcherKind::AnyBitmask,
            ByteMatcher::Range(_) => MatcherKind::Range,
            ByteMatcher::Set(_) => MatcherKind::Set,
            ByteMatcher::Table(_) => MatcherKind::Table,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for ByteMatcher {
                #[inline]
                fn from(matcher: $ty) -> Self {
                    ByteMatcher::$variant(matcher)
                }
            }
        )+
    };
}

impl_from_variant!(
    One(OneByteMatcher),
    InvertedOne(InvertedByteMatcher),
    Any(AnyByteMatcher),
    CaseInsensitive(CaseInsensitiveMatcher),
    AllBitmask(AllBitmaskMatcher),
    AnyBitmask(AnyBitmaskMatcher),
    Range(RangeMatcher),
    Set(SetMatcher),
    Table(TableMatcher),
);

impl ByteMatch for ByteMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        match self {
            ByteMatcher::One(m) => m.matches(byte),
            ByteMatcher::InvertedOne(m) => m.matches(byte),
            ByteMatcher::Any(m) => m.matches(byte),
            ByteMatcher::CaseInsensitive(m) => m.matches(byte),
            ByteMatcher::AllBitmask(m) => m.matches(byte),
            ByteMatcher::AnyBitmask(m) => m.matches(byte),
            ByteMatcher::Range(m) => m.matches(byte),
            ByteMatcher::Set(m) => m.matches(byte),
            ByteMatcher::Table(m) => m.matches(byte),
        }
    }

    fn cardinality(&self) -> usize {
        match self {
            ByteMatcher::One(m) => m.cardinality(),
            ByteMatcher::InvertedOne(m) => m.cardinality(),
            ByteMatcher::Any(m) => m.cardinality(),
            ByteMatcher::CaseInsensitive(m) => m.cardinality(),
            ByteMatcher::AllBitmask(m) => m.cardinality(),
            ByteMatcher::AnyBitmask(m) => m.cardinality(),
            ByteMatcher::Range(m) => m.cardinality(),
            ByteMatcher::Set(m) => m.cardinality(),
            ByteMatcher::Table(m) => m.cardinality(),
        }
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        match self {
            ByteMatcher::One(m) => Iter::One(m.iter()),
            ByteMatcher::InvertedOne(m) => Iter::InvertedOne(m.iter()),
            ByteMatcher::Any(m) => Iter::Any(m.iter()),
            ByteMatcher::CaseInsensitive(m) => Iter::CaseInsensitive(m.iter()),
            ByteMatcher::AllBitmask(m) => Iter::AllBitmask(m.iter()),
            ByteMatcher::AnyBitmask(m) => Iter::AnyBitmask(m.iter()),
            ByteMatcher::Range(m) => Iter::Range(m.iter()),
            ByteMatcher::Set(m) => Iter::Set(m.iter()),
            ByteMatcher::Table(m) => Iter::Table(m.iter()),
        }
    }

    fn to_regular_expression(&self, pretty: bool) -> String {
        match self {
            ByteMatcher::One(m) => m.to_regular_expression(pretty),
            ByteMatcher::InvertedOne(m) => m.to_regular_expression(pretty),
            ByteMatcher::Any(m) => m.to_regular_expression(pretty),
            ByteMatcher::CaseInsensitive(m) => m.to_regular_expression(pretty),
            ByteMatcher::AllBitmask(m) => m.to_regular_expression(pretty),
            ByteMatcher::AnyBitmask(m) => m.to_regular_expression(pretty),
            ByteMatcher::Range(m) => m.to_regular_expression(pretty),
            ByteMatcher::Set(m) => m.to_regular_expression(pretty),
            ByteMatcher::Table(m) => m.to_regular_expression(pretty),
        }
    }
}

impl Display for ByteMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_regular_expression(false))
    }
}

MultiIter!(
    Iter,
    One,
    InvertedOne,
    Any,
    CaseInsensitive,
    AllBitmask,
    AnyBitmask,
    Range,
    Set,
    Table
);
