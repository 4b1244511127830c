//! Fixed-width rendering of match records.
//!
//! Each field is hard-cut to its width (no ellipsis) and then left-justified
//! with trailing spaces:
//!
//! ```text
//! <path:40> line <number:3>        <content:40>\n
//! ```
//!
//! Line numbers are cut like any other field, so line 1234 renders as `123`.

use crate::config::FieldWidths;
use crate::render::record::{FormattedLine, MatchRecord};

/// Label between the path and the line number.
const LINE_LABEL: &str = " line ";
/// Gap between the line number and the content.
const CONTENT_GAP: &str = "        ";

/// Renders match records into fixed-width lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormatter {
    widths: FieldWidths,
}

impl LineFormatter {
    pub fn new(widths: FieldWidths) -> Self {
        Self { widths }
    }

    pub fn format(&self, record: &MatchRecord<'_>) -> FormattedLine {
        self.format_line(
            &record.file_path.to_string_lossy(),
            record.line_number,
            record.raw_content,
        )
    }

    /// Render one match from its raw parts.
    ///
    /// The content is whitespace-trimmed before it is cut, then any newline
    /// left at either end is stripped. Pure: equal inputs give equal output.
    pub fn format_line(&self, file_path: &str, line_number: usize, raw_line: &str) -> FormattedLine {
        let FieldWidths {
            path: path_width,
            line_number: number_width,
            content: content_width,
        } = self.widths;

        let path = truncate(file_path, path_width);
        let number = line_number.to_string();
        let number = truncate(&number, number_width);
        let content = truncate(raw_line.trim(), content_width).trim_matches('\n');

        FormattedLine::new(format!(
            "{path:<path_width$}{LINE_LABEL}{number:<number_width$}{CONTENT_GAP}{content:<content_width$}\n"
        ))
    }
}

/// Concatenate formatted lines and trim the result for display.
pub fn finalize_output(lines: &[FormattedLine]) -> String {
    let joined: String = lines.iter().map(FormattedLine::as_str).collect();
    joined.trim().to_string()
}

/// Cut `text` to at most `max_chars` characters.
fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
