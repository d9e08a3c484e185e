//! Locale-aware string comparison for the alphabetical sort.
//!
//! Approximates the default collation of a browser's `localeCompare`:
//!
//! 1. **Primary**: base letters, ignoring case and diacritics (`é` == `E`)
//! 2. **Secondary**: diacritics (`e` < `é`)
//! 3. **Tertiary**: case, lowercase first (`apple` < `Apple`)
//!
//! Names that are still equal fall back to code point order.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two strings the way a user expects a sorted list to read.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use toolshelf::engine::collate::compare;
///
/// assert_eq!(compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare("Banana", "cherry"), Ordering::Less);
/// assert_eq!(compare("apple", "Apple"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased base characters with combining marks removed.
fn primary_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Lowercased decomposition with combining marks kept.
fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Case weights per base character: 0 for lowercase or uncased, 1 for uppercase.
fn tertiary_key(s: &str) -> Vec<u8> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| u8::from(c.is_uppercase()))
        .collect()
}
