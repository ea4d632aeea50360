//! Input handling
//!
//! Values come from positional arguments, a file, or stdin, one value per
//! line.

use anyhow::{Context, Result};
use segtext_engine::Input;
use std::path::Path;

/// Marker for reading from stdin
pub const STDIN_MARKER: &str = "-";

/// Where the values to process come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource<'a> {
    /// Values given on the command line
    Args(&'a [String]),
    /// A file with one value per line
    File(&'a Path),
    /// Standard input, one value per line
    Stdin,
}

impl<'a> ValueSource<'a> {
    /// Pick the source from the command-line arguments
    ///
    /// Positional values win; otherwise `--input` is used, with `-` meaning
    /// stdin; with neither, stdin is read.
    pub fn resolve(values: &'a [String], input: Option<&'a Path>) -> Self {
        if !values.is_empty() {
            return ValueSource::Args(values);
        }
        match input {
            Some(path) if path.as_os_str() == STDIN_MARKER => ValueSource::Stdin,
            Some(path) => ValueSource::File(path),
            None => ValueSource::Stdin,
        }
    }

    /// Read all values
    pub fn read_values(&self) -> Result<Vec<String>> {
        match self {
            ValueSource::Args(values) => Ok(values.to_vec()),
            ValueSource::File(path) => Input::from_file(*path)
                .into_values()
                .with_context(|| format!("Failed to read file: {}", path.display())),
            ValueSource::Stdin => Input::from_reader(std::io::stdin())
                .into_values()
                .context("Failed to read from stdin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_args_win_over_input() {
        let values = vec!["123".to_string()];
        let path = PathBuf::from("cards.txt");
        let source = ValueSource::resolve(&values, Some(&path));
        assert_eq!(source, ValueSource::Args(&values));
    }

    #[test]
    fn test_dash_means_stdin() {
        let path = PathBuf::from("-");
        assert_eq!(ValueSource::resolve(&[], Some(&path)), ValueSource::Stdin);
        assert_eq!(ValueSource::resolve(&[], None), ValueSource::Stdin);
    }

    #[test]
    fn test_read_values_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("values.txt");
        fs::write(&path, "4111111111111111\n1011112222\n").unwrap();

        let values = ValueSource::resolve(&[], Some(&path)).read_values().unwrap();
        assert_eq!(values, vec!["4111111111111111", "1011112222"]);
    }

    #[test]
    fn test_read_values_missing_file() {
        let path = PathBuf::from("/nonexistent/values.txt");
        let err = ValueSource::File(&path).read_values().unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
