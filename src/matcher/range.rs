use std::ops::RangeInclusive;

use either::Either;

use crate::{
    matcher::ByteMatch,
    render::{invert_prefix, range_item},
    util::all_bytes,
};

/// Matches the byte values from `start` to `end` inclusive, or when
/// inverted, every value outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeMatcher {
    start: u8,
    end: u8,
    inverted: bool,
}

impl RangeMatcher {
    /// # Panics
    /// Panics if `start > end`.
    pub fn new(start: u8, end: u8, inverted: bool) -> Self {
        assert!(start <= end, "invalid byte range {start}..={end}");
        Self { start, end, inverted }
    }

    #[inline]
    pub fn range(&self) -> RangeInclusive<u8> {
        self.start..=self.end
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl ByteMatch for RangeMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        (self.start <= byte && byte <= self.end) != self.inverted
    }

    fn cardinality(&self) -> usize {
        let count = (self.end - self.start) as usize + 1;
        if self.inverted { 256 - count } else { count }
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        if self.inverted {
            let this = *self;
            Either::Right(all_bytes().filter(move |&b| this.matches(b)))
        } else {
            Either::Left(self.range())
        }
    }

    fn to_regular_expression(&self, pretty: bool) -> String {
        format!(
            "[{}{}]",
            invert_prefix(self.inverted),
            range_item(pretty, self.start, self.end)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByteSet, testutil::check_matcher};

    #[test]
    fn test_range_matcher() {
        for (start, end) in [(0, 0), (0, 255), (255, 255), (0x30, 0x39), (1, 254)] {
            let expected = ByteSet::from(start..=end);
            check_matcher(&RangeMatcher::new(start, end, false), &expected);
            check_matcher(&RangeMatcher::new(start, end, true), &expected.inverted());
        }
    }

    #[test]
    fn test_range_rendering() {
        let matcher = RangeMatcher::new(b'a', b'z', false);
        assert_eq!(matcher.to_regular_expression(false), "[61-7a]");
        assert_eq!(matcher.to_regular_expression(true), "['a'-'z']");
        let matcher = RangeMatcher::new(0, 0x1f, true);
        assert_eq!(matcher.to_regular_expression(true), "[^00-1f]");
    }

    #[test]
    #[should_panic(expected = "invalid byte range")]
    fn test_range_rejects_reversed() {
        RangeMatcher::new(10, 9, false);
    }
}
