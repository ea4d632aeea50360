//! Property-based tests for boundary calculation and assembly

use proptest::prelude::*;
use segtext_core::boundary::{grammar_boundaries, per_group_boundaries};
use segtext_core::highlight::locate;
use segtext_core::*;

proptest! {
    #[test]
    fn grammar_round_trip(text in "[0-9a-z]{0,30}", template in "[1 ]{0,30}") {
        let mode = SegmentMode::resolve(Some(&template), 0, 0);
        let assembly = segment(&text, &mode, DEFAULT_SEPARATOR);
        if assembly.is_complete() {
            prop_assert_eq!(strip_separators(&assembly.text, DEFAULT_SEPARATOR), text);
        }
    }

    #[test]
    fn grammar_inserts_every_offset_that_fits(
        text in "[0-9]{0,30}",
        template in "[1 ]{0,30}",
    ) {
        let boundaries = grammar_boundaries(&template, DEFAULT_SEPARATOR);
        let len = text.chars().count();
        let fitting = boundaries.iter().filter(|&offset| offset <= len).count();

        let mode = SegmentMode::resolve(Some(&template), 0, 0);
        let assembly = segment(&text, &mode, DEFAULT_SEPARATOR);

        // Offsets are sorted, so the first one that does not fit stops the pass
        prop_assert_eq!(assembly.inserted, fitting);
        prop_assert_eq!(
            assembly.text.chars().filter(|&c| c == DEFAULT_SEPARATOR).count(),
            fitting
        );
        if boundaries.last().map_or(true, |last| last <= len) {
            prop_assert!(assembly.is_complete());
            for offset in boundaries.iter() {
                prop_assert_eq!(assembly.text.chars().nth(offset), Some(DEFAULT_SEPARATOR));
            }
        }
    }

    #[test]
    fn per_group_layout(text in "[0-9]{0,40}", group in 1usize..7, tail in 1usize..7) {
        let mode = SegmentMode::resolve(None, group, tail);
        let assembly = segment(&text, &mode, DEFAULT_SEPARATOR);
        prop_assert!(assembly.is_complete());
        prop_assert_eq!(strip_separators(&assembly.text, DEFAULT_SEPARATOR), text.clone());

        let groups: Vec<&str> = assembly.text.split(DEFAULT_SEPARATOR).collect();
        if tail >= text.len() {
            prop_assert_eq!(groups.len(), 1);
        } else {
            let (last, rest) = groups.split_last().unwrap();
            prop_assert_eq!(last.len(), tail);
            let (first, middle) = rest.split_first().unwrap();
            prop_assert!(!first.is_empty() && first.len() <= group);
            for g in middle {
                prop_assert_eq!(g.len(), group);
            }
        }
    }

    #[test]
    fn per_group_offsets_strictly_increase(len in 0usize..200, group in 0usize..9, tail in 0usize..9) {
        let set = per_group_boundaries(len, group, tail);
        let offsets = set.as_slice();
        prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(offsets.iter().all(|&o| o > 0 && o < len));
    }

    #[test]
    fn shifted_bound_accepts_raw_length_and_rejects_beyond(text in "[a-z]{1,20}") {
        let len = text.chars().count();
        let assembler = Assembler::new(DEFAULT_SEPARATOR, OffsetPolicy::Shifted);

        let at_end = assembler.assemble(&text, &BoundarySet::from_offsets([len]));
        prop_assert!(at_end.is_complete());
        prop_assert_eq!(at_end.text, format!("{text} "));

        let beyond = assembler.assemble(&text, &BoundarySet::from_offsets([1, len + 1]));
        prop_assert_eq!(beyond.halted_at, Some(len + 1));
        prop_assert_eq!(beyond.inserted, 1);
    }

    #[test]
    fn strip_is_idempotent(text in "[ 0-9a-z]{0,30}") {
        let once = strip_separators(&text, DEFAULT_SEPARATOR);
        prop_assert_eq!(strip_separators(&once, DEFAULT_SEPARATOR), once.clone());
        prop_assert!(!once.contains(DEFAULT_SEPARATOR));
    }

    #[test]
    fn highlight_starts_at_last_separator(text in "[ 0-9]{0,30}") {
        match locate(&text, DEFAULT_SEPARATOR) {
            Some(range) => {
                prop_assert_eq!(range.end, text.chars().count());
                prop_assert!(range.slice(&text).starts_with(DEFAULT_SEPARATOR));
                prop_assert!(!range.slice(&text)[1..].contains(DEFAULT_SEPARATOR));
            }
            None => prop_assert!(!text.contains(DEFAULT_SEPARATOR)),
        }
    }

    #[test]
    fn delimited_strip_matches_manual_removal(
        prefix in "[a-z ]{0,10}",
        body in "[0-9]{0,10}",
        suffix in "[a-z .]{0,10}",
    ) {
        let wrapped = format!("{prefix}#{body}#{suffix}");
        prop_assert_eq!(strip_delimited(&wrapped, '#'), format!("{prefix}{body}{suffix}"));
    }
}
