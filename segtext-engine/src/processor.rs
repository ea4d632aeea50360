//! Main formatter
//!
//! [`Segmenter`] runs the core pipeline for a [`FormatConfig`] and returns a
//! [`Formatted`] value: the display text, the range to emphasize, and enough
//! of the input to read the canonical value back.

use crate::config::FormatConfig;
use segtext_core::highlight;
use segtext_core::{segment, strip_delimited, strip_separators, Assembly, HighlightRange, Wrapped};
use tracing::{debug, trace};

/// Display text produced by a [`Segmenter`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formatted {
    /// Text with separators inserted
    pub text: String,
    /// Range of `text` to paint with the emphasis style, in characters
    pub highlight: Option<HighlightRange>,
    /// Value the text was produced from
    pub raw: String,
    /// Mixed-mode delimiter, if one was used
    pub delimiter: Option<char>,
    /// Separator that was inserted
    pub separator: char,
}

impl Formatted {
    /// Recover the canonical value the way a host reads it back
    ///
    /// With a delimiter the wrapping delimiters are removed from the raw
    /// value (empty when they did not wrap anything); otherwise every
    /// separator is removed from the displayed text.
    pub fn read_back(&self) -> String {
        match self.delimiter {
            Some(delimiter) => strip_delimited(&self.raw, delimiter),
            None => strip_separators(&self.text, self.separator),
        }
    }

    /// The emphasized part of the text
    pub fn highlighted(&self) -> Option<&str> {
        self.highlight.map(|range| range.slice(&self.text))
    }

    /// Split the text into the parts before, inside and after the highlight
    pub fn split_highlight(&self) -> (&str, &str, &str) {
        match self.highlight {
            Some(range) => {
                let bytes = range.byte_range(&self.text);
                (
                    &self.text[..bytes.start],
                    &self.text[bytes.clone()],
                    &self.text[bytes.end..],
                )
            }
            None => (self.text.as_str(), "", ""),
        }
    }
}

/// Formats raw values for display
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    config: FormatConfig,
}

impl Segmenter {
    /// Create a segmenter for a configuration
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Format the whole of `raw`
    ///
    /// Empty text is returned as is, whatever the template.
    pub fn format(&self, raw: &str) -> Formatted {
        let separator = self.config.separator;
        if raw.is_empty() {
            return Formatted {
                text: String::new(),
                highlight: None,
                raw: String::new(),
                delimiter: None,
                separator,
            };
        }

        let assembly = self.assemble(raw);
        let highlight = self.locate(&assembly.text, 0);
        Formatted {
            text: assembly.text,
            highlight,
            raw: raw.to_string(),
            delimiter: None,
            separator,
        }
    }

    /// Format only the part of `raw` wrapped in `delimiter`
    ///
    /// Text before the first and after the last delimiter is kept as is and
    /// both delimiters are dropped. Without a matching pair the raw text is
    /// returned unchanged.
    pub fn format_mixed(&self, raw: &str, delimiter: char) -> Formatted {
        let separator = self.config.separator;
        let Some(wrapped) = Wrapped::split(raw, delimiter) else {
            trace!(%delimiter, "no delimiter pair; leaving text unformatted");
            return Formatted {
                text: raw.to_string(),
                highlight: None,
                raw: raw.to_string(),
                delimiter: Some(delimiter),
                separator,
            };
        };

        let assembly = self.assemble(wrapped.body);
        let highlight = self.locate(&assembly.text, wrapped.prefix_chars());
        Formatted {
            text: wrapped.join(&assembly.text),
            highlight,
            raw: raw.to_string(),
            delimiter: Some(delimiter),
            separator,
        }
    }

    /// Format with an optional delimiter; `None` formats the whole text
    pub fn format_with(&self, raw: &str, delimiter: Option<char>) -> Formatted {
        match delimiter {
            Some(delimiter) => self.format_mixed(raw, delimiter),
            None => self.format(raw),
        }
    }

    /// Remove the configured separator from displayed text
    pub fn strip_separators(&self, displayed: &str) -> String {
        strip_separators(displayed, self.config.separator)
    }

    /// Remove the wrapping delimiters from a mixed-mode value
    pub fn strip_delimited(&self, raw: &str, delimiter: char) -> String {
        strip_delimited(raw, delimiter)
    }

    fn assemble(&self, text: &str) -> Assembly {
        let mode = self.config.mode();
        debug!(%mode, chars = text.chars().count(), "segmenting text");
        let assembly = segment(text, &mode, self.config.separator);
        if let Some(offset) = assembly.halted_at {
            debug!(
                offset,
                inserted = assembly.inserted,
                "boundary beyond text length; remaining boundaries skipped"
            );
        }
        assembly
    }

    fn locate(&self, segment_text: &str, prefix_len: usize) -> Option<HighlightRange> {
        if !self.config.emphasis_enabled {
            return None;
        }
        let range = highlight::locate_after(segment_text, self.config.separator, prefix_len);
        trace!(?range, "located trailing segment");
        range
    }
}
