//! Command-line input: picking arguments out of raw tokens and validating
//! them into a [`SearchRequest`](crate::search::SearchRequest).

pub mod args;
pub mod validation;

pub use args::RawArguments;
pub use validation::{InputValidator, ValidationError};
