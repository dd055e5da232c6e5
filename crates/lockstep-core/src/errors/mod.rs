//! Error types for the lockstep engine.
//!
//! Two domains only: configuration problems (fatal at setup, before any
//! file is scanned) and run-level scan failures. Malformed comments and
//! unparseable files are deliberately *not* errors — they resolve locally
//! to "no match" and "empty scan".

pub mod config_error;
pub mod error_code;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::LockstepErrorCode;
pub use scan_error::ScanError;
