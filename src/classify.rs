//! Pure classifiers which recognise byte sets that a cheaper matcher can
//! reproduce exactly. Each returns `None` when its shape does not apply.

mod bits;
mod case;
mod range;

pub use bits::{all_bitmask_for, any_bitmask_for};
pub use case::case_insensitive_char;
pub use range::contiguous_range;
pub(crate) use bits::{all_bitmask_set, any_bitmask_set};
