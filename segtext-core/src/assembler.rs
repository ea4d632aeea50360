//! Separator insertion
//!
//! The assembler walks the raw text once, copying characters and emitting a
//! separator at every boundary. Per-group offsets are expressed in unformatted
//! coordinates, so each insertion pushes the remaining boundaries one position
//! to the right; the number of separators already inserted is carried as the
//! shift.

use crate::mode::SegmentMode;
use crate::types::BoundarySet;

/// How boundary offsets relate to the text being assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// Offsets are final-layout positions and must not exceed the raw length
    Fixed,
    /// Offsets are raw-text positions, shifted by one per earlier insertion
    Shifted,
}

/// Outcome of one assembly pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Text with separators inserted
    pub text: String,
    /// Number of separators inserted
    pub inserted: usize,
    /// Boundary that failed the bound check, stopping the pass
    pub halted_at: Option<usize>,
}

impl Assembly {
    /// Whether every boundary was applied
    pub fn is_complete(&self) -> bool {
        self.halted_at.is_none()
    }
}

/// Inserts a separator character at boundary offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assembler {
    separator: char,
    policy: OffsetPolicy,
}

impl Assembler {
    /// Create an assembler with an explicit offset policy
    pub fn new(separator: char, policy: OffsetPolicy) -> Self {
        Self { separator, policy }
    }

    /// Create the assembler matching a segmentation mode
    pub fn for_mode(mode: &SegmentMode<'_>, separator: char) -> Self {
        let policy = if mode.shifts_offsets() {
            OffsetPolicy::Shifted
        } else {
            OffsetPolicy::Fixed
        };
        Self::new(separator, policy)
    }

    /// Offset policy in use
    pub fn policy(&self) -> OffsetPolicy {
        self.policy
    }

    /// Insert separators into `text` at `boundaries`
    ///
    /// Boundaries are applied in ascending order. The first boundary outside
    /// the allowed range stops the pass; the rest of the text is copied
    /// unchanged and later boundaries are ignored even if they would fit.
    pub fn assemble(&self, text: &str, boundaries: &BoundarySet) -> Assembly {
        let raw_len = text.chars().count();
        let mut out =
            String::with_capacity(text.len() + boundaries.len() * self.separator.len_utf8());
        let mut chars = text.chars();
        let mut consumed = 0;
        let mut inserted = 0;
        let mut halted_at = None;

        for offset in boundaries.iter() {
            // Position in the text being built, and the largest legal position
            let (position, bound) = match self.policy {
                OffsetPolicy::Fixed => (offset, raw_len),
                OffsetPolicy::Shifted => (offset + inserted, raw_len + inserted),
            };
            if position > bound {
                halted_at = Some(offset);
                break;
            }

            let take = position - inserted - consumed;
            out.extend(chars.by_ref().take(take));
            consumed += take;
            out.push(self.separator);
            inserted += 1;
        }
        out.extend(chars);

        Assembly {
            text: out,
            inserted,
            halted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_SEPARATOR;

    fn fixed() -> Assembler {
        Assembler::new(DEFAULT_SEPARATOR, OffsetPolicy::Fixed)
    }

    fn shifted() -> Assembler {
        Assembler::new(DEFAULT_SEPARATOR, OffsetPolicy::Shifted)
    }

    #[test]
    fn test_fixed_offsets_are_final_positions() {
        let set = BoundarySet::from_offsets([3, 7, 11]);
        let assembly = fixed().assemble("1112223334444", &set);
        assert_eq!(assembly.text, "111 222 333 4444");
        assert_eq!(assembly.inserted, 3);
        assert!(assembly.is_complete());
    }

    #[test]
    fn test_shifted_offsets_move_right() {
        let set = BoundarySet::from_offsets([2, 6]);
        let assembly = shifted().assemble("1234567890", &set);
        assert_eq!(assembly.text, "12 3456 7890");
    }

    #[test]
    fn test_fixed_halts_on_first_violation() {
        // 11 exceeds the text length of 9; later offsets are never tried
        let set = BoundarySet::from_offsets([3, 11, 12]);
        let assembly = fixed().assemble("111222333", &set);
        assert_eq!(assembly.text, "111 222333");
        assert_eq!(assembly.inserted, 1);
        assert_eq!(assembly.halted_at, Some(11));
    }

    #[test]
    fn test_fixed_offset_at_end_appends() {
        let set = BoundarySet::from_offsets([3]);
        assert_eq!(fixed().assemble("abc", &set).text, "abc ");
    }

    #[test]
    fn test_offset_zero_prepends() {
        let set = BoundarySet::from_offsets([0]);
        assert_eq!(fixed().assemble("abc", &set).text, " abc");
        assert_eq!(shifted().assemble("abc", &set).text, " abc");
    }

    #[test]
    fn test_shifted_accepts_raw_length() {
        let set = BoundarySet::from_offsets([1, 3]);
        let assembly = shifted().assemble("abc", &set);
        assert_eq!(assembly.text, "a bc ");
        assert!(assembly.is_complete());
    }

    #[test]
    fn test_shifted_halts_past_raw_length() {
        let set = BoundarySet::from_offsets([1, 4]);
        let assembly = shifted().assemble("abc", &set);
        assert_eq!(assembly.text, "a bc");
        assert_eq!(assembly.halted_at, Some(4));
    }

    #[test]
    fn test_adjacent_template_separators() {
        let set = BoundarySet::from_offsets([2, 3]);
        assert_eq!(fixed().assemble("1122", &set).text, "11  22");
    }

    #[test]
    fn test_multibyte_text_and_separator() {
        let assembler = Assembler::new('·', OffsetPolicy::Shifted);
        let set = BoundarySet::from_offsets([2]);
        assert_eq!(assembler.assemble("αβγδ", &set).text, "αβ·γδ");
    }

    #[test]
    fn test_for_mode_policy() {
        let per_group = SegmentMode::resolve(None, 4, 4);
        assert_eq!(
            Assembler::for_mode(&per_group, ' ').policy(),
            OffsetPolicy::Shifted
        );
        let grammar = SegmentMode::resolve(Some("1 1"), 0, 0);
        assert_eq!(
            Assembler::for_mode(&grammar, '-').policy(),
            OffsetPolicy::Fixed
        );
    }
}
