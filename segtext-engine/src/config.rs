//! Formatting configuration
//!
//! A [`FormatConfig`] is built once per host and handed to every formatting
//! call. Defaults: no template, both group lengths zero, emphasis off, red
//! emphasis color, space separator.

use crate::color::Color;
use crate::error::{EngineError, Result};
use segtext_core::{SegmentMode, DEFAULT_SEPARATOR};

/// Names of the built-in presets, see [`FormatConfig::preset`]
pub const PRESETS: &[&str] = &["plain", "card-number", "card-template", "phone"];

/// Formatting options for one host
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FormatConfig {
    /// Template whose separator positions mark where separators go
    pub template: Option<String>,
    /// Group size in fixed-group mode
    pub per_group_length: usize,
    /// Size of the trailing, unsegmented group in fixed-group mode
    pub last_group_length: usize,
    /// Whether the trailing segment is emphasized
    pub emphasis_enabled: bool,
    /// Color for the emphasized segment
    pub emphasis_color: Color,
    /// Character inserted between groups
    pub separator: char,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            template: None,
            per_group_length: 0,
            last_group_length: 0,
            emphasis_enabled: false,
            emphasis_color: Color::default(),
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl FormatConfig {
    /// Create a builder
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::default()
    }

    /// No formatting at all
    pub fn plain() -> Self {
        Self::default()
    }

    /// Groups of four with the last four emphasized
    pub fn card_number() -> Self {
        Self {
            per_group_length: 4,
            last_group_length: 4,
            emphasis_enabled: true,
            ..Default::default()
        }
    }

    /// Sixteen-digit card layout driven by a template
    pub fn card_template() -> Self {
        Self {
            template: Some("1111 2222 3333 4444".to_string()),
            ..Default::default()
        }
    }

    /// Three-four-four phone number layout
    pub fn phone() -> Self {
        Self {
            template: Some("138 0013 8000".to_string()),
            ..Default::default()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::plain()),
            "card-number" => Some(Self::card_number()),
            "card-template" => Some(Self::card_template()),
            "phone" => Some(Self::phone()),
            _ => None,
        }
    }

    /// Segmentation strategy selected by this configuration
    pub fn mode(&self) -> SegmentMode<'_> {
        SegmentMode::resolve(
            self.template.as_deref(),
            self.per_group_length,
            self.last_group_length,
        )
    }

    /// Check values a deserializer or a caller could have set directly
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_control() {
            return Err(EngineError::ConfigError(format!(
                "separator {:?} is a control character",
                self.separator
            )));
        }
        Ok(())
    }
}

/// Configuration builder
#[derive(Debug, Default, Clone)]
pub struct FormatConfigBuilder {
    config: FormatConfig,
}

impl FormatConfigBuilder {
    /// Start from an existing configuration
    pub fn from_config(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Set the template
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.config.template = Some(template.into());
        self
    }

    /// Remove the template
    pub fn clear_template(mut self) -> Self {
        self.config.template = None;
        self
    }

    /// Set the group size for fixed-group mode
    pub fn per_group_length(mut self, length: usize) -> Self {
        self.config.per_group_length = length;
        self
    }

    /// Set the trailing group size for fixed-group mode
    pub fn last_group_length(mut self, length: usize) -> Self {
        self.config.last_group_length = length;
        self
    }

    /// Set both group sizes, e.g. `group_format(3, 4)` for `123 456 789 0123`
    pub fn group_format(self, per_group_length: usize, last_group_length: usize) -> Self {
        self.per_group_length(per_group_length)
            .last_group_length(last_group_length)
    }

    /// Enable or disable emphasis of the trailing segment
    pub fn emphasis(mut self, enabled: bool) -> Self {
        self.config.emphasis_enabled = enabled;
        self
    }

    /// Set the emphasis color
    pub fn emphasis_color(mut self, color: Color) -> Self {
        self.config.emphasis_color = color;
        self
    }

    /// Set the separator character
    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<FormatConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Parse a mixed-mode delimiter; an empty string means "no delimiter"
pub fn parse_delimiter(value: &str) -> Result<Option<char>> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(ch), None) => Ok(Some(ch)),
        _ => Err(EngineError::InvalidDelimiter {
            value: value.to_string(),
        }),
    }
}

/// Parse a separator, which must be exactly one printable character
pub fn parse_separator(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !ch.is_control() => Ok(ch),
        _ => Err(EngineError::InvalidSeparator {
            value: value.to_string(),
        }),
    }
}
