//! Diagnostic construction for revision conflicts.

use lockstep_core::types::diagnostic::{Diagnostic, Severity};

use super::types::MagicComment;

/// Message attached to every revision conflict. Tooling downstream keys
/// on this string, so it never varies with the ids or revisions involved.
pub const UNMATCHED_REVISION_MESSAGE: &str = "Unmatched feature revision";

/// Build the diagnostic for a magic comment whose revision conflicts
/// with the run's record for its feature id.
pub fn violation_at(comment: &MagicComment) -> Diagnostic {
    Diagnostic {
        location: comment.location.clone(),
        feature_id: comment.feature_id.clone(),
        revision: comment.revision.clone(),
        message: UNMATCHED_REVISION_MESSAGE.to_string(),
        severity: Severity::Error,
    }
}
