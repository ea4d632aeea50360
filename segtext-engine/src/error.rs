//! Engine error types
//!
//! Formatting itself never fails; these errors come from parsing user-facing
//! values and reading input.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Delimiter is not a single character
    #[error("invalid delimiter {value:?}: expected a single character")]
    InvalidDelimiter {
        /// The rejected delimiter text
        value: String,
    },

    /// Separator is empty, longer than one character, or a control character
    #[error("invalid separator {value:?}: expected one printable character")]
    InvalidSeparator {
        /// The rejected separator text
        value: String,
    },

    /// Color value could not be parsed
    #[error("invalid color {value:?}: expected #rrggbb, #rgb or a color name")]
    InvalidColor {
        /// The rejected color text
        value: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),

    /// Encoding error (UTF-8, etc.)
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for EngineError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        EngineError::EncodingError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidDelimiter {
            value: "##".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid delimiter \"##\": expected a single character"
        );

        let err = EngineError::ConfigError("bad".to_string());
        assert_eq!(err.to_string(), "invalid configuration: bad");
    }

    #[test]
    fn test_from_utf8_error() {
        let err: EngineError = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, EngineError::EncodingError(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: EngineError = io.into();
        assert_eq!(err, EngineError::IoError("missing".to_string()));
    }
}
