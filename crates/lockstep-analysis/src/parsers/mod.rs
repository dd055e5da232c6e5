//! Comment parsing on top of tree-sitter.
//!
//! The engine never sees raw source; this layer turns a file into the
//! finite, source-ordered comment stream the pipeline consumes.

pub mod comments;

pub use comments::{extract_comments, parse_source, CommentToken};
