//! Keyword search over a file or a directory tree.
//!
//! - [`pattern`] compiles a keyword and match mode into a per-line decision
//! - [`scanner`] applies it to a single file
//! - [`walker`] applies the scanner to every visible file under a root

pub mod pattern;
pub mod request;
pub mod scanner;
pub mod walker;

pub use pattern::{matches, wildcard_count, MatchMode, PatternMatcher};
pub use request::SearchRequest;
pub use scanner::FileScanner;
pub use walker::TreeWalker;
