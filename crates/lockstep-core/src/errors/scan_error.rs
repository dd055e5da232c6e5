//! Run-level scan errors.
//!
//! Per-file problems (unreadable file, no syntax tree) are handled in
//! place with a warning and an empty scan; only failures that sink the
//! whole run surface here.

use std::path::PathBuf;

use super::error_code::{self, LockstepErrorCode};

/// Errors that can abort an entire scan run.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("directory walk failed: {message}")]
    Walk { message: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LockstepErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Walk { .. } => error_code::SCAN_WALK_FAILED,
            Self::Io { .. } => error_code::SCAN_IO_FAILED,
        }
    }
}
