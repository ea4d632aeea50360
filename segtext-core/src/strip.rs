//! Recovering the canonical value from displayed text

use crate::splice::Wrapped;

/// Remove the first and last `delimiter` from `text`
///
/// Returns an empty string when the delimiter does not wrap anything, which
/// is what a host reads back for an unwrapped mixed-mode value.
pub fn strip_delimited(text: &str, delimiter: char) -> String {
    match Wrapped::split(text, delimiter) {
        Some(wrapped) => wrapped.join(wrapped.body),
        None => String::new(),
    }
}

/// Remove every `separator` from `text`
pub fn strip_separators(text: &str, separator: char) -> String {
    text.chars().filter(|&ch| ch != separator).collect()
}
