//! # lockstep-core
//!
//! Foundation crate for the lockstep revision checker.
//! Defines configuration, errors, events, shared types, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::LockstepConfig;
pub use errors::error_code::LockstepErrorCode;
pub use errors::{ConfigError, ScanError};
pub use events::handler::LockstepEventHandler;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::diagnostic::{Diagnostic, Severity, SourceLocation};
