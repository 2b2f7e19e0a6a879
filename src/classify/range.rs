use crate::ByteSet;

/// Returns `(lo, hi)` if the set is exactly the values from `lo` to `hi`
/// inclusive with no gaps.
///
/// ```
/// use byteclass::{ByteSet, classify::contiguous_range};
///
/// assert_eq!(contiguous_range(&ByteSet::from(b'0'..=b'9')), Some((b'0', b'9')));
/// assert_eq!(contiguous_range(&ByteSet::from_iter([1, 3])), None);
/// ```
pub fn contiguous_range(set: &ByteSet) -> Option<(u8, u8)> {
    let (lo, hi) = (set.first()?, set.last()?);
    // sets are unique, so a span matching the cardinality has no gaps
    ((hi - lo) as usize == set.len() - 1).then_some((lo, hi))
}
