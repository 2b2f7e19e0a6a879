/// Declares an enum which wraps one iterator per matcher variant so that
/// `ByteMatcher::iter` can return a single concrete type.
#[doc(hidden)]
#[macro_export]
macro_rules! MultiIter {
    ($type:ident, $($name:ident),+) => {
        #[must_use]
        pub(crate) enum $type<$($name),+> {
            $($name($name)),+
        }

        impl<T, $($name: Iterator<Item = T>),+> Iterator for $type<$($name),+> {
            type Item = T;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                match self {
                    $(Self::$name(iter) => iter.next(),)+
                }
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                match self {
                    $(Self::$name(iter) => iter.size_hint(),)+
                }
            }
        }

        impl<T, $($name: Iterator<Item = T> + std::iter::FusedIterator),+> std::iter::FusedIterator
        for $type<$($name),+> { }
    };
}

/// Every byte value in ascending order.
#[inline]
pub(crate) fn all_bytes() -> std::ops::RangeInclusive<u8> {
    0..=u8::MAX
}
