//! Boundary calculation
//!
//! Produces the character offsets at which a separator is inserted. Template
//! offsets are final-layout positions; per-group offsets are positions in the
//! unformatted text and are shifted by the assembler.

use crate::mode::SegmentMode;
use crate::types::BoundarySet;

/// Compute boundaries for a text of `text_len` characters
pub fn compute(mode: &SegmentMode<'_>, text_len: usize, separator: char) -> BoundarySet {
    match *mode {
        SegmentMode::Grammar(Some(template)) => grammar_boundaries(template, separator),
        SegmentMode::Grammar(None) => BoundarySet::new(),
        SegmentMode::PerGroup { group, tail } => {
            per_group_boundaries(text_len, group.get(), tail.get())
        }
    }
}

/// Every position of `separator` inside `template`
pub fn grammar_boundaries(template: &str, separator: char) -> BoundarySet {
    let mut boundaries = BoundarySet::new();
    for (index, ch) in template.chars().enumerate() {
        if ch == separator {
            boundaries.push_ascending(index);
        }
    }
    boundaries
}

/// Group edges for `len` characters split into `group`-sized groups with an
/// unsegmented trailing group of `tail` characters
///
/// When `len - tail` is not a multiple of `group` the first group is short.
/// No boundary is placed at the very end of the text.
pub fn per_group_boundaries(len: usize, group: usize, tail: usize) -> BoundarySet {
    let mut boundaries = BoundarySet::new();
    if group == 0 || tail >= len {
        return boundaries;
    }

    let body = len - tail;
    let remain = body % group;
    if remain > 0 && remain < len {
        boundaries.push_ascending(remain);
    }
    for offset in (remain + group..=body).step_by(group) {
        if offset < len {
            boundaries.push_ascending(offset);
        }
    }
    boundaries
}
