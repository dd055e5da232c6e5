//! Top-level Scanner struct orchestrating walker → parse → comment check.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use lockstep_core::config::LockstepConfig;
use lockstep_core::errors::{ConfigError, ScanError};
use lockstep_core::events::handler::LockstepEventHandler;
use lockstep_core::events::types::*;
use lockstep_core::types::diagnostic::Diagnostic;
use rayon::prelude::*;

use crate::engine::{scan_comments, CommentMatcher, RevisionRegistry};
use crate::parsers::{extract_comments, parse_source};

use super::types::{DiscoveredFile, RunReport, ScanStats};
use super::walker;

/// Per-run counters updated concurrently by file-scan tasks.
#[derive(Default)]
struct ScanCounters {
    scanned: AtomicUsize,
    skipped: AtomicUsize,
    comments: AtomicUsize,
    magic_comments: AtomicUsize,
}

/// The top-level scanner that orchestrates file discovery, parsing, and
/// revision-consistency checking.
#[derive(Debug)]
pub struct Scanner {
    config: LockstepConfig,
    matcher: CommentMatcher,
}

impl Scanner {
    /// Create a scanner, compiling the magic-comment pattern up front.
    ///
    /// A pattern that does not compile or lacks the `id` / `revision`
    /// capture groups fails here, before any file is touched.
    pub fn new(config: LockstepConfig) -> Result<Self, ConfigError> {
        let matcher = CommentMatcher::from_config(&config.engine)?;
        Ok(Self { config, matcher })
    }

    /// The compiled matcher this scanner checks comments against.
    pub fn matcher(&self) -> &CommentMatcher {
        &self.matcher
    }

    /// Perform a full scan of the given root directory.
    ///
    /// Every scan gets a fresh registry: revisions recorded in one run
    /// never leak into the next. Emits events via the provided handler.
    pub fn scan(
        &self,
        root: &Path,
        event_handler: &dyn LockstepEventHandler,
    ) -> Result<RunReport, ScanError> {
        event_handler.on_scan_started(&ScanStartedEvent {
            root: root.to_path_buf(),
            file_count: None,
        });

        // Phase 1: Discovery
        let discovery_start = Instant::now();
        let files = match walker::walk_directory(root, &self.config.scan) {
            Ok(files) => files,
            Err(e) => {
                event_handler.on_scan_error(&ScanErrorEvent {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };
        let discovery_ms = discovery_start.elapsed().as_millis() as u64;

        // Emit progress with total count
        event_handler.on_scan_progress(&ScanProgressEvent {
            processed: 0,
            total: files.len(),
        });

        // Phase 2: Parse + check
        let scan_start = Instant::now();
        let registry = RevisionRegistry::new();
        let counters = ScanCounters::default();
        let processed = AtomicUsize::new(0);
        let total = files.len();

        let scan_files = || -> Vec<Diagnostic> {
            files
                .par_iter()
                .flat_map_iter(|file| {
                    let count = processed.fetch_add(1, Ordering::Relaxed);
                    if count % 100 == 0 {
                        event_handler.on_scan_progress(&ScanProgressEvent {
                            processed: count,
                            total,
                        });
                    }

                    self.scan_file(file, &registry, &counters, event_handler)
                })
                .collect()
        };

        let mut diagnostics = match self.scan_pool() {
            Some(pool) => pool.install(scan_files),
            None => scan_files(),
        };

        let scan_ms = scan_start.elapsed().as_millis() as u64;

        // Which comment of a conflicting pair got flagged was decided by
        // scan order; sorting fixes presentation order only.
        diagnostics.sort_by(|a, b| a.location.sort_key().cmp(&b.location.sort_key()));

        let stats = ScanStats {
            files_discovered: files.len(),
            files_scanned: counters.scanned.load(Ordering::Relaxed),
            files_skipped: counters.skipped.load(Ordering::Relaxed),
            comments_seen: counters.comments.load(Ordering::Relaxed),
            magic_comments: counters.magic_comments.load(Ordering::Relaxed),
            features_tracked: registry.feature_count(),
            discovery_ms,
            scan_ms,
        };

        event_handler.on_scan_complete(&ScanCompleteEvent {
            files_scanned: stats.files_scanned,
            files_skipped: stats.files_skipped,
            violations: diagnostics.len(),
            duration_ms: discovery_ms + scan_ms,
        });

        tracing::info!(
            files = stats.files_scanned,
            skipped = stats.files_skipped,
            features = stats.features_tracked,
            violations = diagnostics.len(),
            duration_ms = discovery_ms + scan_ms,
            "scan complete"
        );

        Ok(RunReport { diagnostics, stats })
    }

    /// Dedicated scan pool when `[scan] threads` is set; `None` runs on
    /// rayon's global pool. One thread makes the file pass sequential over
    /// the path-sorted file list, which pins baselines for reproducibility.
    fn scan_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self.config.scan.effective_threads();
        if threads == 0 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                tracing::warn!(error = %e, "failed to build scan pool, using global pool");
                None
            }
        }
    }

    /// Check one file's comments against the run's registry.
    ///
    /// Unsupported, unreadable, and unparseable files are all skipped
    /// without failing the run.
    fn scan_file(
        &self,
        file: &DiscoveredFile,
        registry: &RevisionRegistry,
        counters: &ScanCounters,
        event_handler: &dyn LockstepEventHandler,
    ) -> Vec<Diagnostic> {
        let language = match file.language {
            Some(language) => language,
            None => {
                counters.skipped.fetch_add(1, Ordering::Relaxed);
                return Vec::new();
            }
        };

        let source = match std::fs::read(&file.path) {
            Ok(source) => source,
            Err(e) => {
                // Non-fatal — skip file, continue scanning
                tracing::warn!(
                    path = %file.path.display(),
                    error = %e,
                    "failed to read file"
                );
                counters.skipped.fetch_add(1, Ordering::Relaxed);
                return Vec::new();
            }
        };

        let ext = file.path.extension().and_then(|e| e.to_str());
        let tree = match parse_source(&source, language, ext) {
            Some(tree) => tree,
            None => {
                // No syntax tree means no comment stream; the file
                // contributes nothing to the run.
                tracing::debug!(path = %file.path.display(), "no syntax tree, skipping");
                counters.skipped.fetch_add(1, Ordering::Relaxed);
                return Vec::new();
            }
        };

        let file_label = file.path.to_string_lossy();
        let comments = extract_comments(&tree, &source, &file_label, language);
        let outcome = scan_comments(&comments, &self.matcher, registry, event_handler);

        counters.scanned.fetch_add(1, Ordering::Relaxed);
        counters.comments.fetch_add(outcome.comments, Ordering::Relaxed);
        counters
            .magic_comments
            .fetch_add(outcome.magic_comments, Ordering::Relaxed);

        event_handler.on_file_scanned(&FileScannedEvent {
            path: file.path.clone(),
            comments: outcome.comments,
            magic_comments: outcome.magic_comments,
            violations: outcome.diagnostics.len(),
        });

        outcome.diagnostics
    }
}
