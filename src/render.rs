//! Byte-class regular expression rendering shared by all matchers.

use itertools::Itertools;
use range_set_blaze::RangeSetBlaze;

/// Renders a single byte value. In pretty mode printable ASCII characters
/// are quoted, everything else is two lower-case hex digits.
pub(crate) fn byte_to_string(pretty: bool, value: u8) -> String {
    if pretty && (0x20..=0x7e).contains(&value) && value != b'\'' {
        format!("'{}'", value as char)
    } else {
        format!("{value:02x}")
    }
}

/// Renders an inverted prefix for matchers without brackets.
#[inline]
pub(crate) fn invert_prefix(inverted: bool) -> &'static str {
    if inverted { "^" } else { "" }
}

/// Renders a bracketed set of values, collapsing runs of three or more
/// consecutive values into `lo-hi`.
pub(crate) fn set_expression(
    values: impl Iterator<Item = u8>,
    inverted: bool,
    pretty: bool,
) -> String {
    let separator = if pretty { " " } else { "" };
    let items = RangeSetBlaze::from_iter(values)
        .ranges()
        .flat_map(|run| {
            let (start, end) = run.into_inner();
            match end - start {
                0 => vec![byte_to_string(pretty, start)],
                1 => vec![byte_to_string(pretty, start), byte_to_string(pretty, end)],
                _ => vec![range_item(pretty, start, end)],
            }
        })
        .join(separator);
    format!("[{}{items}]", invert_prefix(inverted))
}

#[inline]
pub(crate) fn range_item(pretty: bool, start: u8, end: u8) -> String {
    format!(
        "{}-{}",
        byte_to_string(pretty, start),
        byte_to_string(pretty, end)
    )
}
