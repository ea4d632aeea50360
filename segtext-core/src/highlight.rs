//! Trailing-segment emphasis
//!
//! The emphasized range starts at the last separator of a formatted segment
//! and runs to the end of that segment. Painting the range is up to the host.

use crate::types::HighlightRange;

/// Range from the last `separator` in `segment` to its end
pub fn locate(segment: &str, separator: char) -> Option<HighlightRange> {
    let mut last = None;
    let mut len = 0;
    for (index, ch) in segment.chars().enumerate() {
        if ch == separator {
            last = Some(index);
        }
        len = index + 1;
    }
    last.map(|start| HighlightRange::new(start, len))
}

/// Like [`locate`], for a segment that sits `prefix_len` characters into the
/// full output
pub fn locate_after(segment: &str, separator: char, prefix_len: usize) -> Option<HighlightRange> {
    locate(segment, separator).map(|range| range.shift(prefix_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_last_separator() {
        let text = "1234 5678 9012 3456";
        assert_eq!(locate(text, ' '), Some(HighlightRange::new(14, 19)));
    }

    #[test]
    fn test_locate_without_separator() {
        assert_eq!(locate("1234567890", ' '), None);
        assert_eq!(locate("", ' '), None);
    }

    #[test]
    fn test_locate_trailing_separator() {
        assert_eq!(locate("ab ", ' '), Some(HighlightRange::new(2, 3)));
    }

    #[test]
    fn test_locate_after_prefix() {
        let range = locate_after("10 1111 2222 3333", ' ', 8);
        assert_eq!(range, Some(HighlightRange::new(20, 25)));
    }
}
