use crate::ByteSet;

/// Returns the mask `m` such that the set is exactly `{b : b & m == m}`.
///
/// Every byte of such a set contains `m`, and `m` itself is a member, so the
/// AND of all members is the only candidate worth verifying.
///
/// ```
/// use byteclass::{ByteSet, classify::all_bitmask_for};
///
/// let high = ByteSet::from(0x80..=0xff);
/// assert_eq!(all_bitmask_for(&high), Some(0x80));
/// assert_eq!(all_bitmask_for(&ByteSet::from_iter([1, 2])), None);
/// ```
pub fn all_bitmask_for(set: &ByteSet) -> Option<u8> {
    if set.is_empty() {
        return None;
    }
    let candidate = set.iter().fold(0xff, |acc, b| acc & b);
    (all_bitmask_set(candidate) == *set).then_some(candidate)
}

/// Returns the non-zero mask `m` such that the set is exactly
/// `{b : b & m != 0}`.
///
/// The single-bit members of such a set are exactly the bits of `m`, so
/// their OR is the only candidate worth verifying. The OR of all members
/// is not usable here: it is `0xff` for every non-empty mask.
///
/// ```
/// use byteclass::{ByteSet, classify::any_bitmask_for};
///
/// let low_bits = ByteSet::from_iter((0..=255u8).filter(|b| b & 0x03 != 0));
/// assert_eq!(any_bitmask_for(&low_bits), Some(0x03));
/// assert_eq!(any_bitmask_for(&ByteSet::from_iter([1, 2])), None);
/// ```
pub fn any_bitmask_for(set: &ByteSet) -> Option<u8> {
    let candidate = set
        .iter()
        .filter(|b| b.is_power_of_two())
        .fold(0, |acc, b| acc | b);
    if candidate == 0 {
        return None;
    }
    (any_bitmask_set(candidate) == *set).then_some(candidate)
}

/// All bytes which have every bit of `mask` set.
pub(crate) fn all_bitmask_set(mask: u8) -> ByteSet {
    (0..=255u8).filter(|b| b & mask == mask).collect()
}

/// All bytes which have at least one bit of `mask` set.
pub(crate) fn any_bitmask_set(mask: u8) -> ByteSet {
    (0..=255u8).filter(|b| b & mask != 0).collect()
}
