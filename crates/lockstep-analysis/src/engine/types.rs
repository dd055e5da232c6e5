//! Core types for the consistency engine.

use lockstep_core::types::diagnostic::SourceLocation;

/// A comment that matched the magic-comment pattern.
///
/// Both tokens are non-empty by construction: comments that do not match
/// the configured pattern (or match with an empty group) never become a
/// `MagicComment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicComment {
    /// Grouping key under which revisions are compared.
    pub feature_id: String,
    /// Opaque token compared for string equality only — "2" and "02"
    /// are distinct revisions.
    pub revision: String,
    pub location: SourceLocation,
}

/// Result of a registry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// First sighting of the feature id, or a revision already on record.
    NoConflict,
    /// The revision disagrees with the revisions recorded for this id.
    Conflict,
}

impl CheckOutcome {
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict)
    }
}
