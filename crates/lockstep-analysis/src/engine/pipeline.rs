//! Per-file check pass over an extracted comment stream.

use lockstep_core::events::LockstepEventHandler;
use lockstep_core::types::diagnostic::Diagnostic;

use crate::parsers::CommentToken;

use super::diagnostics::violation_at;
use super::matcher::CommentMatcher;
use super::registry::RevisionRegistry;

/// What one file's comment stream produced.
#[derive(Debug, Default)]
pub struct FileOutcome {
    pub diagnostics: Vec<Diagnostic>,
    /// Comments inspected, magic or not.
    pub comments: usize,
    /// Comments that matched the magic pattern.
    pub magic_comments: usize,
}

/// Run one file's comments through the matcher and the run's registry.
///
/// Comments are checked in the order the slice presents them, which the
/// extractor guarantees is source order, so within a file the earliest
/// occurrence of a feature id sets the baseline. Non-magic comments are
/// counted and otherwise ignored.
pub fn scan_comments(
    comments: &[CommentToken],
    matcher: &CommentMatcher,
    registry: &RevisionRegistry,
    handler: &dyn LockstepEventHandler,
) -> FileOutcome {
    let mut outcome = FileOutcome::default();

    for comment in comments {
        outcome.comments += 1;

        let magic = match matcher.try_match(comment) {
            Some(magic) => magic,
            None => continue,
        };
        outcome.magic_comments += 1;

        if registry
            .check_and_register(&magic.feature_id, &magic.revision)
            .is_conflict()
        {
            let diagnostic = violation_at(&magic);
            handler.on_violation(&diagnostic);
            outcome.diagnostics.push(diagnostic);
        }
    }

    outcome
}
