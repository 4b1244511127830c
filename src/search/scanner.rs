//! Single-file scanning.
//!
//! The whole file is read into memory, decoded as UTF-8 and split into
//! physical lines (terminators kept). `\n`, `\r\n` and a lone `\r` all end
//! a line. Each line is tested against the compiled keyword and every hit is
//! formatted immediately.

use crate::error::{Result, WildgrepError};
use crate::render::{FormattedLine, LineFormatter, MatchRecord};
use crate::search::pattern::PatternMatcher;
use log::debug;
use memchr::memchr2;
use std::fs;
use std::io;
use std::path::Path;

/// Applies a [`PatternMatcher`] and a [`LineFormatter`] to one file at a time.
#[derive(Debug, Clone, Copy)]
pub struct FileScanner<'m> {
    matcher: &'m PatternMatcher,
    formatter: LineFormatter,
}

impl<'m> FileScanner<'m> {
    pub fn new(matcher: &'m PatternMatcher, formatter: LineFormatter) -> Self {
        Self { matcher, formatter }
    }

    /// Scan `path` and return its formatted hits in file order.
    ///
    /// # Errors
    /// * [`WildgrepError::FileNotFound`] if the file vanished
    /// * [`WildgrepError::FileError`] if it cannot be read or is not UTF-8
    pub fn scan(&self, path: &Path) -> Result<Vec<FormattedLine>> {
        let content = read_text(path)?;

        let mut hits = Vec::new();
        for (index, line) in split_lines(&content).enumerate() {
            if !self.matcher.is_match(line)? {
                continue;
            }
            let record = MatchRecord {
                file_path: path,
                line_number: index + 1,
                raw_content: line,
            };
            hits.push(self.formatter.format(&record));
        }

        debug!("{}: {} matching line(s)", path.display(), hits.len());
        Ok(hits)
    }
}

/// Read a whole file as text. The handle is closed before this returns.
fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => WildgrepError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => WildgrepError::file_error(format!("Cannot read {}", path.display()), e),
    })?;

    String::from_utf8(bytes).map_err(|e| {
        WildgrepError::file_error(
            format!("{} is not valid UTF-8 text", path.display()),
            io::Error::new(io::ErrorKind::InvalidData, e),
        )
    })
}

/// Split text into lines, keeping each terminator with the line it ends.
///
/// A `\r` directly followed by `\n` is one terminator.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let bytes = text.as_bytes();
    let mut start = 0;

    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let end = match memchr2(b'\n', b'\r', &bytes[start..]) {
            Some(offset) => {
                let at = start + offset;
                if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                    at + 2
                } else {
                    at + 1
                }
            }
            None => bytes.len(),
        };
        let line = &text[start..end];
        start = end;
        Some(line)
    })
}
