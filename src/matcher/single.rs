use std::iter;

use crate::{
    matcher::ByteMatch,
    render::{byte_to_string, invert_prefix},
    util::all_bytes,
};

/// Matches exactly one byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneByteMatcher {
    value: u8,
}

impl OneByteMatcher {
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl ByteMatch for OneByteMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        byte == self.value
    }

    #[inline]
    fn cardinality(&self) -> usize {
        1
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        iter::once(self.value)
    }

    fn to_regular_expression(&self, pretty: bool) -> String {
        byte_to_string(pretty, self.value)
    }
}

/// Matches every byte value except one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvertedByteMatcher {
    value: u8,
}

impl InvertedByteMatcher {
    #[inline]
    pub const fn new(value: u8) -> Self {
        Self { value }
    }

    /// The single byte value which is not matched
    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }
}

impl ByteMatch for InvertedByteMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        byte != self.value
    }

    #[inline]
    fn cardinality(&self) -> usize {
        255
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        let value = self.value;
        all_bytes().filter(move |&b| b != value)
    }

    fn to_regular_expression(&self, pretty: bool) -> String {
        format!("{}{}", invert_prefix(true), byte_to_string(pretty, self.value))
    }
}

/// Matches every byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnyByteMatcher;

impl ByteMatch for AnyByteMatcher {
    #[inline]
    fn matches(&self, _byte: u8) -> bool {
        true
    }

    #[inline]
    fn cardinality(&self) -> usize {
        256
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        all_bytes()
    }

    fn to_regular_expression(&self, _pretty: bool) -> String {
        ".".to_string()
    }
}

/// Matches the upper and lower case forms of one ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaseInsensitiveMatcher {
    upper: u8,
}

impl CaseInsensitiveMatcher {
    /// Creates a matcher for `letter` in either case.
    ///
    /// # Panics
    /// Panics if `letter` is not an ASCII letter.
    pub fn new(letter: u8) -> Self {
        assert!(
            letter.is_ascii_alphabetic(),
            "case insensitive matcher requires an ASCII letter, got {letter:#04x}"
        );
        Self { upper: letter.to_ascii_uppercase() }
    }

    /// The upper case form of the matched letter
    #[inline]
    pub fn letter(&self) -> u8 {
        self.upper
    }
}

impl ByteMatch for CaseInsensitiveMatcher {
    #[inline]
    fn matches(&self, byte: u8) -> bool {
        byte.to_ascii_uppercase() == self.upper
    }

    #[inline]
    fn cardinality(&self) -> usize {
        2
    }

    fn iter(&self) -> impl Iterator<Item = u8> {
        // upper case letters sort before lower case
        [self.upper, self.upper.to_ascii_lowercase()].into_iter()
    }

    fn to_regular_expression(&self, _pretty: bool) -> String {
        format!("`{}`", self.upper.to_ascii_lowercase() as char)
    }
}
