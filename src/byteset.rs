use std::{
    fmt::{self, Debug, Display},
    ops::RangeInclusive,
};

use bitvec::{BitArr, order::Lsb0};

use crate::render;

pub(crate) type ByteBits = BitArr!(for 256, in u64, Lsb0);

/// A set of byte values stored as a 256-bit membership table.
///
/// `ByteSet` is `Copy` and always iterates in ascending order. It is the input
/// to [`crate::build`] and the storage behind [`crate::TableMatcher`].
///
/// # Examples
///
/// ```
/// use byteclass::ByteSet;
///
/// let set = ByteSet::from_iter(*b"abc");
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(b'b'));
///
/// let inverted = set.inverted();
/// assert_eq!(inverted.len(), 253);
/// assert!(!inverted.contains(b'b'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByteSet {
    bits: ByteBits,
}

static_assertions::const_assert_eq!(std::mem::size_of::<ByteSet>(), 32);

impl ByteSet {
    /// An empty set, suitable for usage in a const context.
    pub const EMPTY: Self = ByteSet { bits: ByteBits::ZERO };

    /// A set containing every byte value.
    pub fn full() -> Self {
        ByteSet { bits: !ByteBits::ZERO }
    }

    /// Inserts the value, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, value: u8) -> bool {
        !self.bits.replace(value as usize, true)
    }

    /// Removes the value, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, value: u8) -> bool {
        self.bits.replace(value as usize, false)
    }

    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        self.bits[value as usize]
    }

    /// Number of values in the set, between 0 and 256.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Returns the smallest value in the set
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.bits.first_one().map(|i| i as u8)
    }

    /// Returns the largest value in the set
    #[inline]
    pub fn last(&self) -> Option<u8> {
        self.bits.last_one().map(|i| i as u8)
    }

    /// Iterates over the values in ascending order.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.bits.iter_ones().map(|i| i as u8)
    }

    /// Iterates over the values missing from the set in ascending order.
    #[inline]
    pub fn iter_missing(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.bits.iter_zeros().map(|i| i as u8)
    }

    /// Returns the complement of this set within `0..=255`.
    #[inline]
    pub fn inverted(&self) -> Self {
        ByteSet { bits: !self.bits }
    }
}

/// Returns every byte value in ascending order.
pub fn all_byte_values() -> [u8; 256] {
    std::array::from_fn(|i| i as u8)
}

/// Returns the byte values from `lo` to `hi` inclusive, or nothing if
/// `lo > hi`.
pub fn bytes_in_range(lo: u8, hi: u8) -> Vec<u8> {
    (lo..=hi).collect()
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = ByteSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl<'a> FromIterator<&'a u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = &'a u8>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Extend<u8> for ByteSet {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl From<RangeInclusive<u8>> for ByteSet {
    fn from(range: RangeInclusive<u8>) -> Self {
        range.collect()
    }
}

impl From<&[u8]> for ByteSet {
    fn from(values: &[u8]) -> Self {
        values.iter().collect()
    }
}

impl Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteSet({})", self.len())
    }
}

impl Display for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::set_expression(self.iter(), false, false))
    }
}
