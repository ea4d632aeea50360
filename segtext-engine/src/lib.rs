//! Formatting facade for grouped text display
//!
//! This crate wraps the algorithms of `segtext-core` behind a configuration
//! value and a [`Segmenter`] that hosts call to produce display text and the
//! range to emphasize.
//!
//! ```rust
//! use segtext_engine::{FormatConfig, Segmenter};
//!
//! let segmenter = Segmenter::new(FormatConfig::card_number());
//! let formatted = segmenter.format("4111111111111111");
//! assert_eq!(formatted.text, "4111 1111 1111 1111");
//! assert_eq!(formatted.read_back(), "4111111111111111");
//! ```

#![warn(missing_docs)]

pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod processor;

// Re-export key types
pub use color::Color;
pub use config::{parse_delimiter, parse_separator, FormatConfig, FormatConfigBuilder, PRESETS};
pub use error::{EngineError, Result};
pub use input::Input;
pub use processor::{Formatted, Segmenter};

// Re-export from core for convenience
pub use segtext_core::{HighlightRange, SegmentMode, DEFAULT_SEPARATOR};
