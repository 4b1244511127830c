//! Positional token interpretation.
//!
//! Only the last three tokens mean anything, read from the end: the last is
//! the path, the one before it the keyword, and the one before that the flag.
//! Any earlier tokens only count towards the argument total.

/// Arguments picked out of the command line, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArguments {
    pub path: Option<String>,
    pub keyword: Option<String>,
    pub flag: Option<String>,
    /// Number of arguments including the program name
    pub argument_count: usize,
}

impl RawArguments {
    /// Interpret `tokens`, which must not include the program name.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let mut from_end = tokens.iter().rev().cloned();

        Self {
            path: from_end.next(),
            keyword: from_end.next(),
            flag: from_end.next(),
            argument_count: tokens.len() + 1,
        }
    }
}
