//! Process-wide revision registry for one analysis run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use lockstep_core::types::collections::{FxHashMap, FxHashSet};

use super::types::CheckOutcome;

/// Maps each feature id to the set of revisions seen so far in this run.
///
/// Created empty when a run starts, shared by every concurrent file-scan
/// task, and discarded when the run ends. The map is monotonic: revisions
/// are only ever added, never removed or overwritten, so a reported
/// conflict stays explainable from the registry's final contents.
///
/// `check_and_register` is one critical section — the membership check
/// and the insertion are not observable separately, which is what makes
/// the "exactly one of two concurrent conflicting comments is flagged"
/// guarantee hold. A single registry-wide mutex serializes ids against
/// each other too; the critical section is a couple of hash operations,
/// so that costs nothing measurable.
#[derive(Debug, Default)]
pub struct RevisionRegistry {
    entries: Mutex<FxHashMap<String, FxHashSet<String>>>,
    checks: AtomicU64,
    conflicts: AtomicU64,
}

impl RevisionRegistry {
    /// Create an empty registry for a new run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check a `(feature id, revision)` pair against the run's record and
    /// register the revision, atomically.
    ///
    /// Conflict iff the id already has revisions on record and this one is
    /// not among them. The revision is added either way, so the same
    /// mismatch is reported once per offending comment, not once per
    /// subsequent sighting of the same pair.
    pub fn check_and_register(&self, feature_id: &str, revision: &str) -> CheckOutcome {
        self.checks.fetch_add(1, Ordering::Relaxed);

        let mut entries = self.entries.lock().unwrap();
        match entries.get_mut(feature_id) {
            // Sets are created with one revision and never shrink, so an
            // existing entry means the id has a baseline.
            Some(revisions) => {
                if revisions.contains(revision) {
                    CheckOutcome::NoConflict
                } else {
                    revisions.insert(revision.to_string());
                    self.conflicts.fetch_add(1, Ordering::Relaxed);
                    CheckOutcome::Conflict
                }
            }
            None => {
                let mut revisions = FxHashSet::default();
                revisions.insert(revision.to_string());
                entries.insert(feature_id.to_string(), revisions);
                CheckOutcome::NoConflict
            }
        }
    }

    /// All revisions recorded for a feature id, sorted for stable output.
    pub fn revisions_for(&self, feature_id: &str) -> Vec<String> {
        let entries = self.entries.lock().unwrap();
        let mut revisions: Vec<String> = entries
            .get(feature_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        revisions.sort();
        revisions
    }

    /// Number of distinct feature ids seen this run.
    pub fn feature_count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Total `check_and_register` calls this run.
    pub fn check_count(&self) -> u64 {
        self.checks.load(Ordering::Relaxed)
    }

    /// Total conflicts reported this run.
    pub fn conflict_count(&self) -> u64 {
        self.conflicts.load(Ordering::Relaxed)
    }
}
