//! String ordering for category names.

use std::cmp::Ordering;

/// Strict "less than" on strings, compared char by char by code point.
///
/// Locale independent and case sensitive: `"B"` sorts before `"a"`. A string
/// sorts before any longer string it is a prefix of.
pub fn lexicographic_less(a: &str, b: &str) -> bool {
    lexicographic_cmp(a, b) == Ordering::Less
}

pub(crate) fn lexicographic_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars();
    let mut right = b.chars();
    loop {
        match (left.next(), right.next()) {
            (Some(l), Some(r)) if l == r => continue,
            (Some(l), Some(r)) => return l.cmp(&r),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}
