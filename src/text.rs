use std::cmp::Ordering;

/// Returns `true` for `[0-9A-Za-z]`.
///
/// Does not consult any locale tables.
#[inline]
pub fn is_alnum(byte: u8) -> bool {
    byte.is_ascii_digit() || byte.is_ascii_uppercase() || byte.is_ascii_lowercase()
}

/// Orders two strings ignoring ASCII case.
///
/// Bytes outside `A-Z` compare as-is, and a string sorts before any longer
/// string it is a case-insensitive prefix of.
pub fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    let l = left.bytes().map(|b| b.to_ascii_lowercase());
    let r = right.bytes().map(|b| b.to_ascii_lowercase());
    l.cmp(r)
}

/// Returns `true` when the strings are equal ignoring ASCII case.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.eq_ignore_ascii_case(right)
}
