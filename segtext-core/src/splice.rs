//! Mixed-mode splitting
//!
//! In mixed mode only the part of the text between the first and the last
//! delimiter is formatted; everything around it is kept as literal text.

/// A text split around a delimiter-wrapped body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapped<'a> {
    /// Literal text before the opening delimiter
    pub prefix: &'a str,
    /// Text between the delimiters, the part to format
    pub body: &'a str,
    /// Literal text after the closing delimiter
    pub suffix: &'a str,
}

impl<'a> Wrapped<'a> {
    /// Split `text` at the first and last occurrence of `delimiter`
    ///
    /// Returns `None` when the delimiter is missing or occurs only once.
    pub fn split(text: &'a str, delimiter: char) -> Option<Self> {
        let first = text.find(delimiter)?;
        let last = text.rfind(delimiter)?;
        if first >= last {
            return None;
        }
        let width = delimiter.len_utf8();
        Some(Self {
            prefix: &text[..first],
            body: &text[first + width..last],
            suffix: &text[last + width..],
        })
    }

    /// Length of the prefix in characters
    pub fn prefix_chars(&self) -> usize {
        self.prefix.chars().count()
    }

    /// Rebuild the text around a replacement body
    pub fn join(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len());
        out.push_str(self.prefix);
        out.push_str(body);
        out.push_str(self.suffix);
        out
    }
}
