//! Configuration errors — raised once at setup, never per-comment.

use std::path::PathBuf;

use super::error_code::{self, LockstepErrorCode};

/// Errors that abort a run before any file is scanned.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("comment pattern is missing the required named capture group `{group}`: {pattern}")]
    MissingCaptureGroup { group: &'static str, pattern: String },

    #[error("comment pattern failed to compile: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl LockstepErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCaptureGroup { .. } => error_code::CONFIG_MISSING_CAPTURE_GROUP,
            Self::InvalidPattern { .. } => error_code::CONFIG_INVALID_PATTERN,
            Self::Read { .. } => error_code::CONFIG_READ_FAILED,
            Self::Parse { .. } => error_code::CONFIG_PARSE_FAILED,
        }
    }
}
