use either::Either;

use crate::{ByteSet, matcher::ByteMatch, render::set_expression, util::all_bytes};

/// Matches a small explicit set of values held in sorted order and
/// searched with a binary search.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetMatcher {
    values: Box<[u8]>,
    inverted: bool,
}

impl SetMatcher {
    pub fn new(values: &ByteSet, inverted: bool) -> Self {
        Self {
            values: values.iter().collect(),
            inverted,
        }
    }

    /// The stored values in ascending order, before inversion is applied
    #[inline]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl ByteMatch for SetMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        self.values.binary_search(&byte).is_ok() != self.inverted
    }

    fn cardinality(&self) -> usize {
        if self.inverted {
            256 - self.values.len()
        } else {
            self.values.len()
        }
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        if self.inverted {
            Either::Right(all_bytes().filter(|&b| self.matches(b)))
        } else {
            Either::Left(self.values.iter().copied())
        }
    }

    fn to_regular_expression(&self, pretty: bool) -> String {
        set_expression(self.values.iter().copied(), self.inverted, pretty)
    }
}

/// Matches any set of values through a 256-bit membership table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableMatcher {
    set: ByteSet,
    inverted: bool,
}

impl TableMatcher {
    #[inline]
    pub fn new(set: ByteSet, inverted: bool) -> Self {
        Self { set, inverted }
    }

    /// The stored set, before inversion is applied
    #[inline]
    pub fn set(&self) -> &ByteSet {
        &self.set
    }

    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl ByteMatch for TableMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        self.set.contains(byte) != self.inverted
    }

    fn cardinality(&self) -> usize {
        if self.inverted {
            256 - self.set.len()
        } else {
            self.set.len()
        }
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        if self.inverted {
            Either::Right(self.set.iter_missing())
        } else {
            Either::Left(self.set.iter())
        }
    }

    fn to_regular_expression(&self, pretty: bool) -> String {
        set_expression(self.set.iter(), self.inverted, pretty)
    }
}

#[cfg(test)]
mod tests {
    use proptest::proptest;

    use super::*;
    use crate::testutil::{SetGen, byte_set, check_matcher};

    #[test]
    fn test_set_matcher() {
        let set = ByteSet::from_iter([0, 7, 8, 9, 100, 255]);
        let matcher = SetMatcher::new(&set, false);
        assert_eq!(matcher.values(), &[0, 7, 8, 9, 100, 255]);
        check_matcher(&matcher, &set);
        assert_eq!(matcher.to_regular_expression(false), "[0007-0964ff]");
        assert_eq!(matcher.to_regular_expression(true), "[00 07-09 'd' ff]");

        let matcher = SetMatcher::new(&set, true);
        check_matcher(&matcher, &set.inverted());
        assert_eq!(matcher.to_regular_expression(false), "[^0007-0964ff]");
    }

    #[test]
    fn test_table_matcher() {
        let mut setgen = SetGen::new(0xDEAD_BEEF);
        for len in [1, 16, 100, 200, 255] {
            let set = setgen.random(len);
            check_matcher(&TableMatcher::new(set, false), &set);
            check_matcher(&TableMatcher::new(set, true), &set.inverted());
        }
    }

    #[test]
    fn test_table_rendering() {
        let set = ByteSet::from(b'a'..=b'f');
        assert_eq!(TableMatcher::new(set, false).to_regular_expression(false), "[61-66]");
        assert_eq!(
            TableMatcher::new(set, true).to_regular_expression(true),
            "[^'a'-'f']"
        );
    }

    proptest! {
        #[test]
        fn test_set_and_table_proptest(set in byte_set()) {
            check_matcher(&SetMatcher::new(&set, false), &set);
            check_matcher(&SetMatcher::new(&set, true), &set.inverted());
            check_matcher(&TableMatcher::new(set, false), &set);
            check_matcher(&TableMatcher::new(set, true), &set.inverted());
        }
    }
}
