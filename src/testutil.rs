use itertools::assert_equal;
use proptest::{
    arbitrary::any, array::uniform32, collection::vec, prop_oneof, strategy::Strategy,
};
use rand::{SeedableRng, seq::index};

use crate::{
    ByteMatch, ByteSet, all_byte_values,
    classify::{all_bitmask_set, any_bitmask_set},
};

/// The set a matcher built from `bytes` and `match_inverse` must match.
pub fn expected_set(bytes: &ByteSet, match_inverse: bool) -> ByteSet {
    if match_inverse { bytes.inverted() } else { *bytes }
}

/// Checks that the predicate, cardinality, enumeration and positional
/// matching of `matcher` all agree with `expected`.
#[track_caller]
pub fn check_matcher(matcher: &impl ByteMatch, expected: &ByteSet) {
    for byte in 0..=255u8 {
        assert_eq!(
            matcher.matches(byte),
            expected.contains(byte),
            "matches({byte:#04x}) for {}",
            matcher.to_regular_expression(false)
        );
    }
    assert_eq!(matcher.cardinality(), expected.len(), "cardinality");
    assert_equal(matcher.iter(), expected.iter());
    assert_eq!(matcher.matching_bytes().len(), matcher.cardinality());

    let haystack = all_byte_values();
    for (position, &byte) in haystack.iter().enumerate() {
        assert_eq!(matcher.matches_at(&haystack, position), expected.contains(byte));
    }
    assert!(!matcher.matches_at(&haystack, haystack.len()));
}

/// A proptest strategy producing non-empty byte sets with a mix of sparse,
/// dense, nearly full, contiguous and bitmask shaped sets.
pub fn byte_set() -> impl Strategy<Value = ByteSet> {
    prop_oneof![
        vec(any::<u8>(), 1..24).prop_map(|values| values.into_iter().collect::<ByteSet>()),
        uniform32(any::<u8>()).prop_map(|bitmap| {
            (0..=255u8)
                .filter(|&b| bitmap[b as usize / 8] & (1 << (b % 8)) != 0)
                .collect::<ByteSet>()
        }),
        vec(any::<u8>(), 0..24)
            .prop_map(|values| values.into_iter().collect::<ByteSet>().inverted()),
        (any::<u8>(), any::<u8>()).prop_map(|(a, b)| ByteSet::from(a.min(b)..=a.max(b))),
        (any::<u8>(), any::<bool>()).prop_map(|(mask, all)| {
            if all { all_bitmask_set(mask) } else { any_bitmask_set(mask) }
        }),
    ]
    .prop_filter("byte set must not be empty", |set| !set.is_empty())
}

pub struct SetGen {
    rng: rand::rngs::StdRng,
}

impl SetGen {
    pub fn new(seed: u64) -> Self {
        let rng = rand::rngs::StdRng::seed_from_u64(seed);
        Self { rng }
    }

    /// A set of `len` distinct random byte values.
    #[track_caller]
    pub fn random(&mut self, len: usize) -> ByteSet {
        assert!(len <= 256, "a byte set holds at most 256 values");
        index::sample(&mut self.rng, 256, len)
            .into_iter()
            .map(|i| i as u8)
            .collect()
    }

    /// A set of `len` consecutive byte values at a random offset.
    #[track_caller]
    pub fn run(&mut self, len: usize) -> ByteSet {
        assert!((1..=256).contains(&len), "run length must be within 1..=256");
        let start = index::sample(&mut self.rng, 257 - len, 1).index(0) as u8;
        ByteSet::from(start..=start + (len - 1) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::contiguous_range;

    #[test]
    fn test_setgen() {
        let mut setgen = SetGen::new(0xDEAD_BEEF);
        for len in [0, 1, 100, 256] {
            assert_eq!(setgen.random(len).len(), len);
        }
        for len in [1, 2, 37, 256] {
            let run = setgen.run(len);
            assert_eq!(run.len(), len);
            assert!(contiguous_range(&run).is_some());
        }
    }
}
