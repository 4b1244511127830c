//! Error types and handling infrastructure for wildgrep.
//!
//! Library code returns [`WildgrepError`] through the crate-wide [`Result`]
//! alias. Input problems are reported separately as
//! [`ValidationError`](crate::input::ValidationError) and are printed and
//! exited on; everything here (unreadable files, undecodable content) is
//! fatal and propagates to the binary untouched.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for wildgrep operations.
#[derive(Error, Debug)]
pub enum WildgrepError {
    /// File system related errors (unreadable file, permission denied, bad encoding)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Path given to a scanner does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Keyword could not be compiled into a matcher
    #[error("Invalid keyword pattern: {message}")]
    PatternError { message: String },

    /// Matching a line against a compiled keyword failed
    #[error("Search operation failed: {message}")]
    SearchError { message: String },
}

/// Standard Result type for wildgrep operations.
pub type Result<T> = std::result::Result<T, WildgrepError>;

impl WildgrepError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a PatternError with a descriptive message
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::PatternError {
            message: message.into(),
        }
    }

    /// Create a SearchError with a descriptive message
    pub fn search(message: impl Into<String>) -> Self {
        Self::SearchError {
            message: message.into(),
        }
    }

    /// True for the IO class of failures that abort a traversal.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::FileError { .. } | Self::FileNotFound { .. })
    }
}

// Automatic conversion from io::Error to WildgrepError
impl From<std::io::Error> for WildgrepError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            std::io::ErrorKind::InvalidData => Self::FileError {
                message: "File is not valid UTF-8 text".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let not_found = WildgrepError::FileNotFound {
            path: PathBuf::from("/test/file.txt"),
        };
        assert_eq!(not_found.to_string(), "File not found: /test/file.txt");

        let pattern = WildgrepError::pattern("regex too big");
        assert_eq!(pattern.to_string(), "Invalid keyword pattern: regex too big");
    }

    #[test]
    fn test_search_errors_are_not_io() {
        assert!(!WildgrepError::search("matcher failed").is_io());
        assert!(!WildgrepError::pattern("too big").is_io());
        assert!(WildgrepError::FileNotFound { path: PathBuf::from("x") }.is_io());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: WildgrepError = io_err.into();

        match &err {
            WildgrepError::FileError { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected FileError variant"),
        }
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_data_maps_to_encoding_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        match WildgrepError::from(io_err) {
            WildgrepError::FileError { message, .. } => {
                assert!(message.contains("UTF-8"));
            }
            other => panic!("Expected FileError, got {other:?}"),
        }
    }
}
