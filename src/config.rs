//! Search tunables.
//!
//! There is no configuration file: the CLI always runs with
//! [`SearchConfig::default`], whose values are the command-line contract.
//! Library callers may build their own to change the wildcard marker or to
//! opt into skipping unreadable files.

/// Default wildcard marker inside keywords.
pub const DEFAULT_WILDCARD: char = '*';
/// Maximum number of command-line arguments, program name included.
pub const DEFAULT_MAX_ARGUMENTS: usize = 4;
/// Maximum number of wildcard markers allowed in a keyword.
pub const DEFAULT_MAX_WILDCARDS: usize = 4;

/// Column widths of a formatted match line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWidths {
    pub path: usize,
    pub line_number: usize,
    pub content: usize,
}

impl Default for FieldWidths {
    fn default() -> Self {
        Self {
            path: 40,
            line_number: 3,
            content: 40,
        }
    }
}

/// What to do when a file cannot be read during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoErrorPolicy {
    /// Abort the whole search on the first unreadable file and discard
    /// everything collected so far.
    #[default]
    FailFast,
    /// Log the failure and keep going with the next file.
    SkipUnreadable,
}

/// Settings shared by validation, matching, formatting and traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub wildcard: char,
    pub max_arguments: usize,
    pub max_wildcards: usize,
    pub widths: FieldWidths,
    pub io_error_policy: IoErrorPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            max_arguments: DEFAULT_MAX_ARGUMENTS,
            max_wildcards: DEFAULT_MAX_WILDCARDS,
            widths: FieldWidths::default(),
            io_error_policy: IoErrorPolicy::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_io_error_policy(mut self, policy: IoErrorPolicy) -> Self {
        self.io_error_policy = policy;
        self
    }

    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }
}
