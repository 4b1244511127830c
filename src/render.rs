//! Rendering of search hits.
//!
//! A matching line becomes a [`MatchRecord`], which [`LineFormatter`] turns
//! into one fixed-width [`FormattedLine`].

pub mod formatter;
pub mod record;

pub use formatter::{finalize_output, LineFormatter};
pub use record::{FormattedLine, MatchRecord};
