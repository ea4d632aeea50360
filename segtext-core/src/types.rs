//! Core value types for separator placement

use core::ops::Range;

/// Ordered set of separator insertion offsets
///
/// Offsets are counted in characters. The set is always strictly increasing,
/// which the assembler relies on when it walks the text once from left to
/// right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BoundarySet {
    offsets: Vec<usize>,
}

impl BoundarySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary offsets, sorting and dropping duplicates
    pub fn from_offsets<I: IntoIterator<Item = usize>>(offsets: I) -> Self {
        let mut offsets: Vec<usize> = offsets.into_iter().collect();
        offsets.sort_unstable();
        offsets.dedup();
        Self { offsets }
    }

    /// Append an offset known to be larger than every offset already present
    pub(crate) fn push_ascending(&mut self, offset: usize) {
        debug_assert!(
            self.offsets.last().map_or(true, |&last| last < offset),
            "boundary offsets must be strictly increasing"
        );
        self.offsets.push(offset);
    }

    /// Offsets as a slice
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of boundaries
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the set has no boundaries
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate offsets in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.iter().copied()
    }

    /// Largest offset, if any
    pub fn last(&self) -> Option<usize> {
        self.offsets.last().copied()
    }
}

impl FromIterator<usize> for BoundarySet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_offsets(iter)
    }
}

impl<'a> IntoIterator for &'a BoundarySet {
    type Item = &'a usize;
    type IntoIter = core::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter()
    }
}

/// Half-open character range of the trailing segment to emphasize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightRange {
    /// First highlighted character (the last separator)
    pub start: usize,
    /// One past the last highlighted character
    pub end: usize,
}

impl HighlightRange {
    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "highlight range must not be inverted");
        Self { start, end }
    }

    /// Number of highlighted characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers nothing
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Move both ends right by `by` characters
    pub fn shift(self, by: usize) -> Self {
        Self::new(self.start + by, self.end + by)
    }

    /// Translate the character range into byte offsets of `text`
    ///
    /// Indices past the end of `text` clamp to `text.len()`.
    pub fn byte_range(&self, text: &str) -> Range<usize> {
        let to_byte = |index: usize| {
            text.char_indices()
                .nth(index)
                .map_or(text.len(), |(byte, _)| byte)
        };
        to_byte(self.start)..to_byte(self.end)
    }

    /// The highlighted part of `text`
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.byte_range(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_offsets_sorts_and_dedups() {
        let set = BoundarySet::from_offsets([7, 3, 3, 11]);
        assert_eq!(set.as_slice(), &[3, 7, 11]);
        assert_eq!(set.len(), 3);
        assert_eq!(set.last(), Some(11));
    }

    #[test]
    fn test_empty_set() {
        let set = BoundarySet::new();
        assert!(set.is_empty());
        assert_eq!(set.last(), None);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_highlight_shift() {
        let range = HighlightRange::new(2, 7).shift(8);
        assert_eq!(range, HighlightRange::new(10, 15));
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn test_highlight_byte_range_multibyte() {
        // 'é' and '€' are two and three bytes long
        let text = "é€ 12";
        let range = HighlightRange::new(2, 5);
        assert_eq!(range.byte_range(text), 5..8);
        assert_eq!(range.slice(text), " 12");
    }

    #[test]
    fn test_highlight_byte_range_clamps() {
        let range = HighlightRange::new(1, 10);
        assert_eq!(range.byte_range("abc"), 1..3);
    }
}
