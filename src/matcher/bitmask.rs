use crate::{matcher::ByteMatch, render::invert_prefix, util::all_bytes};

/// Number of bytes which contain every bit of `mask`.
#[inline]
fn all_bits_count(mask: u8) -> usize {
    1 << (8 - mask.count_ones())
}

/// Matches bytes which have every bit of the mask set, or when inverted,
/// bytes missing at least one of those bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllBitmaskMatcher {
    mask: u8,
    inverted: bool,
}

impl AllBitmaskMatcher {
    #[inline]
    pub const fn new(mask: u8, inverted: bool) -> Self {
        Self { mask, inverted }
    }

    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl ByteMatch for AllBitmaskMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        (byte & self.mask == self.mask) != self.inverted
    }

    fn cardinality(&self) -> usize {
        let count = all_bits_count(self.mask);
        if self.inverted { 256 - count } else { count }
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        let this = *self;
        all_bytes().filter(move |&b| this.matches(b))
    }

    fn to_regular_expression(&self, _pretty: bool) -> String {
        format!("{}&{:02x}", invert_prefix(self.inverted), self.mask)
    }
}

/// Matches bytes which have any bit of the mask set, or when inverted,
/// bytes with none of those bits. A zero mask matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnyBitmaskMatcher {
    mask: u8,
    inverted: bool,
}

impl AnyBitmaskMatcher {
    #[inline]
    pub const fn new(mask: u8, inverted: bool) -> Self {
        Self { mask, inverted }
    }

    #[inline]
    pub fn mask(&self) -> u8 {
        self.mask
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl ByteMatch for AnyBitmaskMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        (byte & self.mask != 0) != self.inverted
    }

    fn cardinality(&self) -> usize {
        // bytes sharing no bit with the mask are the subsets of its
        // complement, as many as the bytes containing every mask bit
        let count = 256 - all_bits_count(self.mask);
        if self.inverted { 256 - count } else { count }
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        let this = *self;
        all_bytes().filter(move |&b| this.matches(b))
    }

    fn to_regular_expression(&self, _pretty: bool) -> String {
        format!("{}~{:02x}", invert_prefix(self.inverted), self.mask)
    }
}

#[cfg(test)]
mod tests {
    use itertools::assert_equal;

    use super::*;
    use crate::{ByteSet, byteset::bytes_in_range, testutil::check_matcher};

    #[test]
    fn test_all_bitmask_matches() {
        let matcher = AllBitmaskMatcher::new(0xff, false);
        assert!(matcher.matches(0xff));
        assert!(all_bytes().take(255).all(|b| !matcher.matches(b)));

        let matcher = AllBitmaskMatcher::new(0, false);
        assert!(all_bytes().all(|b| matcher.matches(b)));

        let matcher = AllBitmaskMatcher::new(0xfe, false);
        assert_equal(matcher.iter(), [0xfe, 0xff]);

        let matcher = AllBitmaskMatcher::new(0x80, false);
        assert_eq!(matcher.matching_bytes(), bytes_in_range(0x80, 0xff));

        let matcher = AllBitmaskMatcher::new(0x03, false);
        assert_eq!(matcher.cardinality(), 64);
        assert_equal(matcher.iter(), (0..64u8).map(|i| (i << 2) | 3));
    }

    #[test]
    fn test_all_bitmask_every_mask() {
        for mask in all_bytes() {
            let label = format!("{mask:#04x}");
            let expected: ByteSet = all_bytes().filter(|b| b & mask == mask).collect();
            let matcher = AllBitmaskMatcher::new(mask, false);
            check_matcher(&matcher, &expected);
            // any byte with the mask bits forced on matches
            assert!(all_bytes().all(|b| matcher.matches(b | mask)), "{label}");
            if mask > 0 {
                // clearing the mask bits never matches
                assert!(all_bytes().all(|b| !matcher.matches(b & !mask)), "{label}");
            }
            check_matcher(&AllBitmaskMatcher::new(mask, true), &expected.inverted());
            assert_eq!(matcher.to_regular_expression(false), format!("&{mask:02x}"));
        }
    }

    #[test]
    fn test_any_bitmask_every_mask() {
        for mask in all_bytes() {
            let expected: ByteSet = all_bytes().filter(|b| b & mask != 0).collect();
            check_matcher(&AnyBitmaskMatcher::new(mask, false), &expected);
            check_matcher(&AnyBitmaskMatcher::new(mask, true), &expected.inverted());
            assert_eq!(
                AnyBitmaskMatcher::new(mask, true).to_regular_expression(true),
                format!("^~{mask:02x}")
            );
        }
    }

    #[test]
    fn test_any_bitmask_zero_matches_nothing() {
        let matcher = AnyBitmaskMatcher::new(0, false);
        assert_eq!(matcher.cardinality(), 0);
        assert!(matcher.iter().next().is_none());
    }
}
