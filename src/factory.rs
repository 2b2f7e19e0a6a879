use crate::{
    BuildErr, ByteMatcher, ByteSet,
    classify::{all_bitmask_for, any_bitmask_for, case_insensitive_char, contiguous_range},
    matcher::{
        ByteMatch,
        bitmask::{AllBitmaskMatcher, AnyBitmaskMatcher},
        range::RangeMatcher,
        set::{SetMatcher, TableMatcher},
        single::{AnyByteMatcher, CaseInsensitiveMatcher, InvertedByteMatcher, OneByteMatcher},
    },
};

/// Sets smaller than this are matched by binary search rather than a table.
pub const DEFAULT_SET_THRESHOLD: usize = 16;

/// Builds a [`ByteMatcher`] for a set of byte values.
pub trait MatcherFactory {
    /// Returns a matcher for `bytes`, or for every other byte value when
    /// `match_inverse` is true.
    ///
    /// Returns [`BuildErr::EmptySet`] if `bytes` is empty.
    fn create(&self, bytes: &ByteSet, match_inverse: bool) -> Result<ByteMatcher, BuildErr>;
}

/// Chooses the cheapest matcher which reproduces the requested set exactly.
///
/// Candidates are tried in a fixed order and the first that applies wins:
/// 1. single value, case-insensitive letter, all but one value, every value
/// 2. all-bits mask, any-bit mask, contiguous range, small sorted set
/// 3. the same as step 2 against the complement, matched inverted
/// 4. a 256-bit table
///
/// # Examples
///
/// ```
/// use byteclass::{ByteMatch, ByteSet, MatcherFactory, MatcherKind, SimpleMatcherFactory};
///
/// let factory = SimpleMatcherFactory::default();
///
/// // everything but three bytes resolves to a small inverted set
/// let set = ByteSet::from_iter([0x00, 0x0a, 0x0d]);
/// let matcher = factory.create(&set, true).unwrap();
/// assert_eq!(matcher.kind(), MatcherKind::Set);
/// assert_eq!(matcher.cardinality(), 253);
/// assert!(!matcher.matches(0x0a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleMatcherFactory {
    set_threshold: usize,
}

impl Default for SimpleMatcherFactory {
    fn default() -> Self {
        Self { set_threshold: DEFAULT_SET_THRESHOLD }
    }
}

impl SimpleMatcherFactory {
    /// Sets the size below which explicit sets are stored sorted and
    /// binary searched. Larger sets fall back to a membership table.
    pub fn with_set_threshold(mut self, set_threshold: usize) -> Self {
        self.set_threshold = set_threshold;
        self
    }

    #[inline]
    pub fn set_threshold(&self) -> usize {
        self.set_threshold
    }

    fn simple_case(values: &ByteSet) -> Option<ByteMatcher> {
        match values.len() {
            // only reachable by inverting a full set
            0 => Some(AnyBitmaskMatcher::new(0, false).into()),
            1 => values.first().map(|v| OneByteMatcher::new(v).into()),
            2 => case_insensitive_char(values).map(|c| CaseInsensitiveMatcher::new(c).into()),
            255 => values
                .iter_missing()
                .next()
                .map(|v| InvertedByteMatcher::new(v).into()),
            256 => Some(AnyByteMatcher.into()),
            _ => None,
        }
    }

    fn invertible_case(&self, values: &ByteSet, inverted: bool) -> Option<ByteMatcher> {
        all_bitmask_for(values)
            .map(|mask| AllBitmaskMatcher::new(mask, inverted).into())
            .or_else(|| {
                any_bitmask_for(values).map(|mask| AnyBitmaskMatcher::new(mask, inverted).into())
            })
            .or_else(|| {
                contiguous_range(values).map(|(lo, hi)| RangeMatcher::new(lo, hi, inverted).into())
            })
            .or_else(|| {
                (values.len() < self.set_threshold)
                    .then(|| SetMatcher::new(values, inverted).into())
            })
    }
}

impl MatcherFactory for SimpleMatcherFactory {
    fn create(&self, bytes: &ByteSet, match_inverse: bool) -> Result<ByteMatcher, BuildErr> {
        if bytes.is_empty() {
            log::debug!("rejecting empty byte set (inverse: {match_inverse})");
            return Err(BuildErr::EmptySet);
        }

        let values = if match_inverse { bytes.inverted() } else { *bytes };
        let matcher = Self::simple_case(&values)
            .or_else(|| self.invertible_case(&values, false))
            .or_else(|| {
                // the complement of the values we want to match
                let complement = if match_inverse { *bytes } else { bytes.inverted() };
                self.invertible_case(&complement, true)
            })
            .unwrap_or_else(|| TableMatcher::new(*bytes, match_inverse).into());

        log::trace!(
            "built {:?} matcher for {} byte values (inverse: {match_inverse}, matches: {})",
            matcher.kind(),
            bytes.len(),
            matcher.cardinality()
        );
        Ok(matcher)
    }
}
