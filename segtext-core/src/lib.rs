//! Separator placement for grouped text display
//!
//! This crate turns a raw value such as `"4111111111111111"` into a grouped
//! display string such as `"4111 1111 1111 1111"`, and back again. It holds
//! only the pure algorithms; configuration, logging and I/O live in
//! `segtext-engine`.
//!
//! # Architecture
//!
//! Formatting runs as a small pipeline:
//! - [`mode`]: picks the segmentation strategy (template grammar or fixed groups)
//! - [`boundary`]: computes the offsets where separators go
//! - [`assembler`]: inserts separators at those offsets
//! - [`highlight`]: finds the trailing segment to emphasize
//!
//! [`splice`] restricts formatting to a delimiter-wrapped substring and
//! [`strip`] reverses the transformation.
//!
//! # Example
//!
//! ```rust
//! use segtext_core::{segment, SegmentMode, DEFAULT_SEPARATOR};
//!
//! let mode = SegmentMode::resolve(None, 4, 4);
//! let assembly = segment("1234567890", &mode, DEFAULT_SEPARATOR);
//! assert_eq!(assembly.text, "12 3456 7890");
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod boundary;
pub mod highlight;
pub mod mode;
pub mod splice;
pub mod strip;
pub mod types;

pub use assembler::{Assembler, Assembly, OffsetPolicy};
pub use mode::SegmentMode;
pub use splice::Wrapped;
pub use strip::{strip_delimited, strip_separators};
pub use types::{BoundarySet, HighlightRange};

/// Separator inserted between groups unless configured otherwise
pub const DEFAULT_SEPARATOR: char = ' ';

/// Run boundary calculation and assembly for `text` under `mode`
pub fn segment(text: &str, mode: &SegmentMode<'_>, separator: char) -> Assembly {
    let boundaries = boundary::compute(mode, text.chars().count(), separator);
    Assembler::for_mode(mode, separator).assemble(text, &boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_grammar_mode() {
        let mode = SegmentMode::resolve(Some("111 222 333 4444"), 0, 0);
        let assembly = segment("1112223334444", &mode, DEFAULT_SEPARATOR);
        assert_eq!(assembly.text, "111 222 333 4444");
        assert_eq!(assembly.inserted, 3);
        assert_eq!(assembly.halted_at, None);
    }

    #[test]
    fn test_segment_per_group_mode() {
        let mode = SegmentMode::resolve(None, 3, 4);
        let assembly = segment("1234567890123", &mode, DEFAULT_SEPARATOR);
        assert_eq!(assembly.text, "123 456 789 0123");
    }

    #[test]
    fn test_segment_without_template_is_identity() {
        let mode = SegmentMode::resolve(None, 0, 0);
        assert_eq!(segment("abc def", &mode, DEFAULT_SEPARATOR).text, "abc def");
    }

    #[test]
    fn test_segment_empty_text() {
        let mode = SegmentMode::resolve(Some("11 22"), 0, 0);
        let assembly = segment("", &mode, DEFAULT_SEPARATOR);
        assert_eq!(assembly.text, "");
        assert_eq!(assembly.inserted, 0);
    }
}
