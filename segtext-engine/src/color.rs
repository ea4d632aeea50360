//! Emphasis color values

use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color used to paint the emphasized range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure red, the default emphasis color
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    /// Pure green
    pub const GREEN: Color = Color::rgb(0x00, 0xff, 0x00);
    /// Pure blue
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xff);
    /// Yellow
    pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0x00);
    /// Cyan
    pub const CYAN: Color = Color::rgb(0x00, 0xff, 0xff);
    /// Magenta
    pub const MAGENTA: Color = Color::rgb(0xff, 0x00, 0xff);
    /// White
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    /// Black
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn named(name: &str) -> Option<Self> {
        let color = match name {
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            "yellow" => Color::YELLOW,
            "cyan" => Color::CYAN,
            "magenta" => Color::MAGENTA,
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            _ => return None,
        };
        Some(color)
    }

    fn from_hex(digits: &str) -> Option<Self> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Color::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #rgb shorthand: each digit is doubled
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 17);
                Some(Color::rgb(
                    short(&digits[0..1])?,
                    short(&digits[1..2])?,
                    short(&digits[2..3])?,
                ))
            }
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::RED
    }
}

impl FromStr for Color {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().to_ascii_lowercase();
        let parsed = match value.strip_prefix('#') {
            Some(digits) => Color::from_hex(digits),
            None => Color::named(&value),
        };
        parsed.ok_or_else(|| EngineError::InvalidColor {
            value: s.to_string(),
        })
    }
}

impl TryFrom<String> for Color {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
