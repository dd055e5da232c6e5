//! End-to-end engine tests: comment streams through matcher, registry,
//! and diagnostic emission, including the host event callbacks.

use std::sync::Mutex;

use lockstep_analysis::engine::diagnostics::UNMATCHED_REVISION_MESSAGE;
use lockstep_analysis::engine::{scan_comments, CommentMatcher, RevisionRegistry};
use lockstep_analysis::parsers::CommentToken;
use lockstep_core::config::DEFAULT_PATTERN;
use lockstep_core::events::{LockstepEventHandler, NoopEventHandler};
use lockstep_core::types::diagnostic::{Diagnostic, Severity, SourceLocation};

// ---- Helpers ----

fn comment_at(file: &str, line: u32, text: &str) -> CommentToken {
    CommentToken {
        text: text.to_string(),
        location: SourceLocation {
            file: file.to_string(),
            line,
            column: 1,
            end_line: line,
            end_column: 1 + text.len() as u32,
        },
    }
}

fn default_matcher() -> CommentMatcher {
    CommentMatcher::new(DEFAULT_PATTERN).unwrap()
}

/// Event handler that records every violation it is told about.
#[derive(Default)]
struct CollectingHandler {
    violations: Mutex<Vec<Diagnostic>>,
}

impl LockstepEventHandler for CollectingHandler {
    fn on_violation(&self, diagnostic: &Diagnostic) {
        self.violations.lock().unwrap().push(diagnostic.clone());
    }
}

// ---- Single stream ----

#[test]
fn test_divergent_revision_reported_at_offending_comment() {
    let comments = vec![
        comment_at("a.rb", 1, "[feature-revision] id: user-profiles, revision: 3"),
        comment_at("a.rb", 2, "some unrelated comment"),
        comment_at("a.rb", 9, "[feature-revision] id: user-profiles, revision: 4"),
    ];
    let registry = RevisionRegistry::new();
    let outcome = scan_comments(&comments, &default_matcher(), &registry, &NoopEventHandler);

    assert_eq!(outcome.diagnostics.len(), 1);
    let diagnostic = &outcome.diagnostics[0];
    assert_eq!(diagnostic.message, UNMATCHED_REVISION_MESSAGE);
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.location.line, 9);
    assert_eq!(diagnostic.feature_id, "user-profiles");
    assert_eq!(diagnostic.revision, "4");
}

#[test]
fn test_consistent_stream_is_quiet() {
    let comments = vec![
        comment_at("a.rb", 1, "[feature-revision] id: billing, revision: 2"),
        comment_at("a.rb", 5, "[feature-revision] id: search, revision: 9"),
        comment_at("a.rb", 8, "[feature-revision] id: billing, revision: 2"),
    ];
    let registry = RevisionRegistry::new();
    let outcome = scan_comments(&comments, &default_matcher(), &registry, &NoopEventHandler);

    assert!(outcome.diagnostics.is_empty());
    assert_eq!(outcome.magic_comments, 3);
    assert_eq!(registry.feature_count(), 2);
}

#[test]
fn test_malformed_annotations_resolve_to_no_match() {
    let comments = vec![
        comment_at("a.rb", 1, "[feature-revision] id: x"),
        comment_at("a.rb", 2, "[feature-revision] revision: 2"),
        comment_at("a.rb", 3, "feature-revision id: x, revision: 2"),
    ];
    let registry = RevisionRegistry::new();
    let outcome = scan_comments(&comments, &default_matcher(), &registry, &NoopEventHandler);

    assert_eq!(outcome.comments, 3);
    assert_eq!(outcome.magic_comments, 0);
    assert!(registry.is_empty());
}

// ---- Cross-stream (registry shared between files) ----

#[test]
fn test_conflict_spans_files_through_shared_registry() {
    let matcher = default_matcher();
    let registry = RevisionRegistry::new();

    let first = scan_comments(
        &[comment_at("a.rb", 2, "[feature-revision] id: user-profiles, revision: 3")],
        &matcher,
        &registry,
        &NoopEventHandler,
    );
    assert!(first.diagnostics.is_empty());

    let second = scan_comments(
        &[comment_at("b.rb", 4, "[feature-revision] id: user-profiles, revision: 4")],
        &matcher,
        &registry,
        &NoopEventHandler,
    );
    assert_eq!(second.diagnostics.len(), 1);
    assert_eq!(second.diagnostics[0].location.file, "b.rb");
    assert_eq!(registry.revisions_for("user-profiles"), vec!["3", "4"]);
}

#[test]
fn test_fresh_registry_forgets_previous_run() {
    let matcher = default_matcher();
    let comments = [comment_at("a.rb", 1, "[feature-revision] id: f, revision: 1")];

    let registry = RevisionRegistry::new();
    scan_comments(&comments, &matcher, &registry, &NoopEventHandler);

    // A new run starts from nothing; revision 2 is a baseline, not a
    // conflict with last run's 1.
    let registry = RevisionRegistry::new();
    let outcome = scan_comments(
        &[comment_at("a.rb", 1, "[feature-revision] id: f, revision: 2")],
        &matcher,
        &registry,
        &NoopEventHandler,
    );
    assert!(outcome.diagnostics.is_empty());
}

// ---- Events ----

#[test]
fn test_handler_sees_each_violation_once() {
    let handler = CollectingHandler::default();
    let comments = vec![
        comment_at("a.rb", 1, "[feature-revision] id: f, revision: 1"),
        comment_at("a.rb", 2, "[feature-revision] id: f, revision: 2"),
        comment_at("a.rb", 3, "[feature-revision] id: f, revision: 3"),
    ];
    let registry = RevisionRegistry::new();
    let outcome = scan_comments(&comments, &default_matcher(), &registry, &handler);

    let seen = handler.violations.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(*seen, outcome.diagnostics);
}
