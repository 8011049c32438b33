/// Converts a language integer into a list index.
///
/// The index is valid when `0 <= value < bound`. Callers that allow one past
/// the end (insertion) pass `len + 1` as the bound.
///
/// ## Returns
/// - `Some(usize)`: The index, if it is in range.
/// - `None`: If the value is negative or not below `bound`.
///
/// ## Example
/// ```
/// use lamb::util::num::i64_to_index;
///
/// assert_eq!(i64_to_index(2, 3), Some(2));
/// assert_eq!(i64_to_index(3, 3), None);
/// assert_eq!(i64_to_index(-1, 3), None);
/// ```
#[must_use]
pub fn i64_to_index(value: i64, bound: usize) -> Option<usize> {
    usize::try_from(value).ok().filter(|&index| index < bound)
}

/// Converts a list size into a language integer, saturating at `i64::MAX`.
#[must_use]
pub fn usize_to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Returns the Unicode code point of `c`.
#[must_use]
pub fn char_to_i64(c: char) -> i64 {
    i64::from(u32::from(c))
}

/// Converts a code point into a character.
///
/// ## Returns
/// `None` if `value` is negative, too large, or a surrogate.
///
/// ## Example
/// ```
/// use lamb::util::num::i64_to_char;
///
/// assert_eq!(i64_to_char(97), Some('a'));
/// assert_eq!(i64_to_char(0xD800), None);
/// assert_eq!(i64_to_char(-1), None);
/// ```
#[must_use]
pub fn i64_to_char(value: i64) -> Option<char> {
    u32::try_from(value).ok().and_then(char::from_u32)
}
