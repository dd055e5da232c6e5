//! The revision consistency engine.
//!
//! Three small pieces: the pattern matcher turns a comment into a
//! `(feature id, revision)` record, the registry answers "does this
//! revision agree with what the run has already seen", and the per-file
//! pipeline wires them together and emits diagnostics for conflicts.

pub mod diagnostics;
pub mod matcher;
pub mod pipeline;
pub mod registry;
pub mod types;

pub use matcher::CommentMatcher;
pub use pipeline::{scan_comments, FileOutcome};
pub use registry::RevisionRegistry;
pub use types::{CheckOutcome, MagicComment};
