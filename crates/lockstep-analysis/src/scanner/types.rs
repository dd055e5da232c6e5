//! Scanner data types.

use std::path::PathBuf;

use lockstep_core::types::diagnostic::Diagnostic;

use super::language::Language;

/// A file found during directory discovery.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub file_size: u64,
    /// None for files whose extension no parser understands; the scanner
    /// skips those without reading them.
    pub language: Option<Language>,
}

/// Aggregate counters for one scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_discovered: usize,
    pub files_scanned: usize,
    /// Unsupported, unreadable, or unparseable files.
    pub files_skipped: usize,
    /// All comments seen, matching or not.
    pub comments_seen: usize,
    /// Comments that matched the magic-comment pattern.
    pub magic_comments: usize,
    /// Distinct feature ids recorded in the registry this run.
    pub features_tracked: usize,
    pub discovery_ms: u64,
    pub scan_ms: u64,
}

/// Everything a scan run produces.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Violations, sorted by (file, line, column) for stable presentation.
    /// Which comment of a conflicting pair got flagged still depends on
    /// scan order — see the registry docs.
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ScanStats,
}

impl RunReport {
    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
