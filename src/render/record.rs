//! Data carried from the scanner to the formatter and on to the output.

use std::fmt;
use std::path::Path;

/// One matching line, before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord<'a> {
    pub file_path: &'a Path,
    /// 1-based
    pub line_number: usize,
    /// Line content as read, terminator included
    pub raw_content: &'a str,
}

/// A rendered, newline-terminated output line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedLine(String);

impl FormattedLine {
    pub(crate) fn new(line: String) -> Self {
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
