//! Keyword matching.
//!
//! A keyword is a glob with a single wildcard marker (`*` by default) that is
//! implicitly wrapped as `*keyword*`, so a line matches when it contains the
//! keyword anywhere. The glob is translated into a regex once and compiled
//! with `grep-regex`; every other character of the keyword is literal.

use crate::config::DEFAULT_WILDCARD;
use crate::error::{Result, WildgrepError};
use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use log::{debug, trace};
use std::borrow::Cow;

/// Line-matching policy selected by the command-line flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Match the line exactly as read
    #[default]
    Literal,
    /// Lowercase both line and keyword before matching (`-i`)
    CaseInsensitive,
    /// Match the unmodified line, but only for keywords without spaces (`-w`)
    WholeWord,
}

impl MatchMode {
    pub const CASE_INSENSITIVE_FLAG: &'static str = "-i";
    pub const WHOLE_WORD_FLAG: &'static str = "-w";

    /// Map a command-line flag to its mode. Unknown flags yield `None`.
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            Self::CASE_INSENSITIVE_FLAG => Some(Self::CaseInsensitive),
            Self::WHOLE_WORD_FLAG => Some(Self::WholeWord),
            _ => None,
        }
    }
}

/// A keyword compiled for one match mode.
///
/// Build it once per search and call [`PatternMatcher::is_match`] per line.
#[derive(Debug)]
pub struct PatternMatcher {
    mode: MatchMode,
    /// `None` when the mode rules out every line up front.
    regex: Option<RegexMatcher>,
}

impl PatternMatcher {
    /// Compile `keyword` under `mode` using the default `*` wildcard.
    pub fn new(keyword: &str, mode: MatchMode) -> Result<Self> {
        Self::with_wildcard(keyword, mode, DEFAULT_WILDCARD)
    }

    /// Compile `keyword` under `mode`, treating `wildcard` as "zero or more
    /// characters".
    ///
    /// # Whole-word mode
    /// A keyword containing a space never matches anything in
    /// [`MatchMode::WholeWord`]. No regex is compiled in that case.
    pub fn with_wildcard(keyword: &str, mode: MatchMode, wildcard: char) -> Result<Self> {
        if mode == MatchMode::WholeWord && keyword.contains(' ') {
            debug!("whole-word keyword {keyword:?} contains a space; no line can match");
            return Ok(Self { mode, regex: None });
        }

        let keyword = match mode {
            MatchMode::CaseInsensitive => Cow::Owned(keyword.to_lowercase()),
            MatchMode::Literal | MatchMode::WholeWord => Cow::Borrowed(keyword),
        };
        let pattern = glob_to_regex(&keyword, wildcard);
        trace!("keyword {keyword:?} compiled to regex {pattern:?}");

        let regex = RegexMatcherBuilder::new()
            .build(&pattern)
            .map_err(|e| WildgrepError::pattern(e.to_string()))?;

        Ok(Self {
            mode,
            regex: Some(regex),
        })
    }

    /// Decide whether one physical line (terminator included) matches.
    pub fn is_match(&self, line: &str) -> Result<bool> {
        let Some(regex) = &self.regex else {
            return Ok(false);
        };

        let found = match self.mode {
            MatchMode::CaseInsensitive => regex.is_match(line.to_lowercase().as_bytes()),
            MatchMode::Literal | MatchMode::WholeWord => regex.is_match(line.as_bytes()),
        };
        found.map_err(|e| WildgrepError::search(e.to_string()))
    }
}

/// One-shot form of [`PatternMatcher`]: does `line` match `keyword` under `mode`?
pub fn matches(line: &str, keyword: &str, mode: MatchMode) -> Result<bool> {
    PatternMatcher::new(keyword, mode)?.is_match(line)
}

/// Count wildcard markers in a keyword.
pub fn wildcard_count(keyword: &str, wildcard: char) -> usize {
    keyword.chars().filter(|&c| c == wildcard).count()
}

/// Translate `*keyword*` into an unanchored regex.
///
/// The surrounding wildcards make anchoring unnecessary: an unanchored search
/// for the inner pattern is the same containment test. `(?s)` lets wildcards
/// span the trailing newline, as a glob does.
fn glob_to_regex(keyword: &str, wildcard: char) -> String {
    let mut body = String::with_capacity(keyword.len() * 2);
    for (index, segment) in keyword.split(wildcard).enumerate() {
        if index > 0 {
            body.push_str(".*");
        }
        body.push_str(&regex_syntax::escape(segment));
    }
    if body.is_empty() {
        body.push_str(".*");
    }
    format!("(?s){body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(line: &str, keyword: &str) -> bool {
        matches(line, keyword, MatchMode::Literal).unwrap()
    }

    #[test]
    fn test_substring_matches_in_literal_mode() {
        assert!(literal("hello world\n", "world"));
        assert!(literal("hello world\n", "lo wo"));
        assert!(!literal("hello world\n", "World"));
    }

    #[test]
    fn test_wildcard_spans_characters() {
        assert!(literal("error: disk full\n", "error*full"));
        assert!(literal("error: disk full\n", "err*"));
        assert!(literal("abc\n", "a*b*c"));
        assert!(!literal("full error\n", "error*full"));
    }

    #[test]
    fn test_empty_keyword_matches_every_line() {
        assert!(literal("anything\n", ""));
        assert!(literal("", ""));
        assert!(literal("\n", "**"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        assert!(literal("cost is $5.00 (approx)\n", "$5.00 (approx)"));
        assert!(!literal("cost is $5x00\n", "$5.00"));
        assert!(literal("a+b=c\n", "a+b"));
        assert!(!literal("aab\n", "a+b"));
        assert!(literal("[x] done?\n", "[x] done?"));
        assert!(!literal("x done!\n", "[x] done?"));
        assert!(literal("path\\to\\file\n", "\\to\\"));
    }

    #[test]
    fn test_case_insensitive_folds_both_sides() {
        assert!(matches("Hello World\n", "world", MatchMode::CaseInsensitive).unwrap());
        assert!(matches("hello world\n", "WORLD", MatchMode::CaseInsensitive).unwrap());
        assert!(matches("HeLLo WoRLD\n", "h*W", MatchMode::CaseInsensitive).unwrap());
        assert!(!matches("Hello World\n", "planet", MatchMode::CaseInsensitive).unwrap());
    }

    #[test]
    fn test_whole_word_rejects_keywords_with_spaces() {
        assert!(!matches("a b c\n", "a b", MatchMode::WholeWord).unwrap());
        assert!(!matches("a b c\n", " ", MatchMode::WholeWord).unwrap());
        assert!(matches("a b c\n", "b", MatchMode::WholeWord).unwrap());
    }

    #[test]
    fn test_whole_word_is_case_sensitive_containment() {
        // Whole-word mode only adds the space restriction; it does not check
        // word boundaries.
        assert!(matches("foobar\n", "oba", MatchMode::WholeWord).unwrap());
        assert!(!matches("FOOBAR\n", "oba", MatchMode::WholeWord).unwrap());
    }

    #[test]
    fn test_wildcard_crosses_line_terminator() {
        assert!(literal("end\n", "end*"));
        assert!(literal("end\n", "d\n"));
    }

    #[test]
    fn test_custom_wildcard_marker() {
        let matcher = PatternMatcher::with_wildcard("a%c", MatchMode::Literal, '%').unwrap();
        assert!(matcher.is_match("abc").unwrap());

        // `*` is an ordinary character once another marker is chosen
        let matcher = PatternMatcher::with_wildcard("a*c", MatchMode::Literal, '%').unwrap();
        assert!(!matcher.is_match("abc").unwrap());
        assert!(matcher.is_match("a*c").unwrap());
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(MatchMode::from_flag("-i"), Some(MatchMode::CaseInsensitive));
        assert_eq!(MatchMode::from_flag("-w"), Some(MatchMode::WholeWord));
        assert_eq!(MatchMode::from_flag("-x"), None);
        assert_eq!(MatchMode::from_flag("-I"), None);
    }

    #[test]
    fn test_wildcard_count() {
        assert_eq!(wildcard_count("a*b**", '*'), 3);
        assert_eq!(wildcard_count("plain", '*'), 0);
    }

    #[test]
    fn test_glob_translation() {
        assert_eq!(glob_to_regex("a*b", '*'), "(?s)a.*b");
        assert_eq!(glob_to_regex("", '*'), "(?s).*");
        assert_eq!(glob_to_regex("1.5", '*'), "(?s)1\\.5");
        assert_eq!(glob_to_regex("(a)*[b]", '*'), "(?s)\\(a\\).*\\[b\\]");
        assert_eq!(glob_to_regex("a*b", '%'), "(?s)a\\*b");
    }
}
