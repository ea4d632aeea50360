//! Segmentation strategy selection

use core::fmt;
use core::num::NonZeroUsize;

/// How separator positions are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode<'a> {
    /// Separator positions are copied from a template such as `"111 222 3333"`.
    /// `None` means no template, so nothing is inserted.
    Grammar(Option<&'a str>),
    /// Fixed-size groups with a separately sized trailing group
    PerGroup {
        /// Size of every group except the trailing one
        group: NonZeroUsize,
        /// Size of the trailing group, left unsegmented
        tail: NonZeroUsize,
    },
}

impl<'a> SegmentMode<'a> {
    /// Pick the strategy for a configuration
    ///
    /// Fixed groups win only when both lengths are non-zero; anything else
    /// falls back to the template, and an empty template counts as absent.
    pub fn resolve(
        template: Option<&'a str>,
        per_group_length: usize,
        last_group_length: usize,
    ) -> Self {
        match (
            NonZeroUsize::new(per_group_length),
            NonZeroUsize::new(last_group_length),
        ) {
            (Some(group), Some(tail)) => SegmentMode::PerGroup { group, tail },
            _ => SegmentMode::Grammar(template.filter(|t| !t.is_empty())),
        }
    }

    /// Whether later offsets move right as separators are inserted
    pub fn shifts_offsets(&self) -> bool {
        matches!(self, SegmentMode::PerGroup { .. })
    }
}

impl fmt::Display for SegmentMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentMode::Grammar(Some(template)) => write!(f, "grammar({template:?})"),
            SegmentMode::Grammar(None) => write!(f, "grammar(none)"),
            SegmentMode::PerGroup { group, tail } => {
                write!(f, "per-group(group={group}, tail={tail})")
            }
        }
    }
}
