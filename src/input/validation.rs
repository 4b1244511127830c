//! Input validation utilities for rejecting bad invocations before any scan.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. argument count
//! 2. wildcard count in the keyword
//! 3. flag legality
//! 4. path existence

use crate::config::SearchConfig;
use crate::input::args::RawArguments;
use crate::search::pattern::{wildcard_count, MatchMode};
use crate::search::SearchRequest;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an invocation was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid program arguments: at most {limit} arguments allowed, got {count}")]
    TooManyArguments { count: usize, limit: usize },

    #[error("Invalid program arguments: a keyword and a path are required")]
    TooFewArguments { count: usize },

    #[error("Invalid program arguments: keyword has {count} wildcards, at most {limit} allowed")]
    TooManyWildcards { count: usize, limit: usize },

    #[error("Invalid program arguments: unknown flag {flag:?}, expected -i or -w")]
    IllegalFlag { flag: String },

    #[error("Path {} not found", .path.display())]
    PathNotFound { path: PathBuf },
}

/// Smallest valid argument count: program name, keyword and path.
const MIN_ARGUMENTS: usize = 3;

/// Turns [`RawArguments`] into a [`SearchRequest`] or a [`ValidationError`].
#[derive(Debug, Clone, Copy)]
pub struct InputValidator<'c> {
    config: &'c SearchConfig,
}

impl<'c> InputValidator<'c> {
    pub fn new(config: &'c SearchConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, args: &RawArguments) -> Result<SearchRequest, ValidationError> {
        let count = args.argument_count;
        if count > self.config.max_arguments {
            return Err(ValidationError::TooManyArguments {
                count,
                limit: self.config.max_arguments,
            });
        }

        let (Some(path), Some(keyword)) = (&args.path, &args.keyword) else {
            return Err(ValidationError::TooFewArguments { count });
        };
        if count < MIN_ARGUMENTS {
            return Err(ValidationError::TooFewArguments { count });
        }

        let wildcards = wildcard_count(keyword, self.config.wildcard);
        if wildcards > self.config.max_wildcards {
            return Err(ValidationError::TooManyWildcards {
                count: wildcards,
                limit: self.config.max_wildcards,
            });
        }

        let mode = match &args.flag {
            Some(flag) => MatchMode::from_flag(flag)
                .ok_or_else(|| ValidationError::IllegalFlag { flag: flag.clone() })?,
            None => MatchMode::Literal,
        };

        if !Path::new(path).exists() {
            return Err(ValidationError::PathNotFound {
                path: PathBuf::from(path),
            });
        }

        Ok(SearchRequest::new(path, keyword.as_str(), mode))
    }
}
