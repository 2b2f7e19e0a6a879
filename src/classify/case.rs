use crate::ByteSet;

/// Returns the upper-case letter if the set is exactly the upper and lower
/// case forms of one ASCII letter.
///
/// ```
/// use byteclass::{ByteSet, classify::case_insensitive_char};
///
/// assert_eq!(case_insensitive_char(&ByteSet::from_iter(*b"Aa")), Some(b'A'));
/// assert_eq!(case_insensitive_char(&ByteSet::from_iter(*b"AB")), None);
/// ```
pub fn case_insensitive_char(set: &ByteSet) -> Option<u8> {
    if set.len() != 2 {
        return None;
    }
    let (upper, lower) = (set.first()?, set.last()?);
    let is_pair =
        upper.is_ascii_alphabetic() && lower.is_ascii_alphabetic() && lower - upper == 32;
    is_pair.then_some(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_pairs() {
        for upper in b'A'..=b'Z' {
            let set = ByteSet::from_iter([upper, upper.to_ascii_lowercase()]);
            assert_eq!(case_insensitive_char(&set), Some(upper));
        }
    }

    #[test]
    fn test_case_pairs_absent() {
        assert_eq!(case_insensitive_char(&ByteSet::from_iter(*b"AB")), None);
        assert_eq!(case_insensitive_char(&ByteSet::from_iter(*b"Ab")), None);
        assert_eq!(case_insensitive_char(&ByteSet::from_iter(*b"a")), None);
        assert_eq!(case_insensitive_char(&ByteSet::from_iter(*b"Aab")), None);
        // 32 apart but not letters
        assert_eq!(case_insensitive_char(&ByteSet::from_iter([0x20, 0x40])), None);
        assert_eq!(case_insensitive_char(&ByteSet::from_iter([b'[', b'{'])), None);
        assert_eq!(case_insensitive_char(&ByteSet::from_iter([b'@', b'`'])), None);
        assert_eq!(case_insensitive_char(&ByteSet::EMPTY), None);
    }
}
