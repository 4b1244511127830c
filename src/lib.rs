//! # wildgrep - Minimal Recursive Wildcard Search
//!
//! Searches a file, or every visible file below a directory, for lines
//! containing a keyword and prints each hit as a fixed-width record:
//!
//! ```text
//! src/notes.txt                            line 12         remember the milk
//! ```
//!
//! ## Features
//!
//! - **Wildcard keywords**: `*` stands for any run of characters; everything
//!   else is literal
//! - **Three match modes**: literal, case-insensitive (`-i`) and whole-word (`-w`)
//! - **Hidden entries skipped**: anything whose name starts with `.` is ignored
//! - **All-or-nothing output**: an unreadable file aborts the search before
//!   anything is printed
//!
//! ## Architecture
//!
//! - [`input`] - Token interpretation and validation into a [`SearchRequest`]
//! - [`search`] - Keyword matching, single-file scanning and tree walking
//! - [`render`] - Fixed-width formatting of hits
//! - [`app`] - Coordination of a single search
//! - [`config`] - Search tunables
//! - [`error`] - Centralized error types

// Core modules
pub mod config;
pub mod error;

// Components
pub mod input;
pub mod render;
pub mod search;

// Coordination
pub mod app;

// Re-export commonly used types for convenience
pub use error::{Result, WildgrepError};

pub use app::Application;
pub use config::{IoErrorPolicy, SearchConfig};
pub use input::{InputValidator, RawArguments, ValidationError};
pub use render::{FormattedLine, LineFormatter};
pub use search::{matches, MatchMode, PatternMatcher, SearchRequest};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
