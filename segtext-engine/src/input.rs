//! Reading values from files and streams
//!
//! Values are stored one per line. [`Input::into_values`] reads the whole
//! source as UTF-8 and splits it.

use crate::error::{EngineError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where a batch of values is read from
pub enum Input {
    /// File with one value per line
    File(PathBuf),
    /// Stream such as stdin or a pipe
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl Input {
    /// Values stored in the file at `path`
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Values read from `reader` until end of stream
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the input and split it into values, one per line
    ///
    /// Line endings (`\n` or `\r\n`) are removed; a trailing newline does not
    /// produce an extra empty value.
    pub fn into_values(self) -> Result<Vec<String>> {
        let text = match self {
            Input::File(path) => fs::read_to_string(&path)
                .map_err(|e| EngineError::IoError(format!("Failed to read file {path:?}: {e}")))?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                String::from_utf8(buffer)?
            }
        };
        Ok(text.lines().map(str::to_string).collect())
    }
}
