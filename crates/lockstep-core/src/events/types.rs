//! Event payload types for the scan lifecycle.

use std::path::PathBuf;

/// Emitted once when a scan run begins.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub root: PathBuf,
    /// Total file count, if known at emission time.
    pub file_count: Option<usize>,
}

/// Emitted periodically while files are being scanned.
#[derive(Debug, Clone)]
pub struct ScanProgressEvent {
    pub processed: usize,
    pub total: usize,
}

/// Emitted after each file's comments have been checked.
#[derive(Debug, Clone)]
pub struct FileScannedEvent {
    pub path: PathBuf,
    /// Comments the file exposed, matching or not.
    pub comments: usize,
    /// Comments that matched the magic-comment pattern.
    pub magic_comments: usize,
    /// Conflicts reported for this file.
    pub violations: usize,
}

/// Emitted once when a scan run finishes.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub violations: usize,
    pub duration_ms: u64,
}

/// Emitted when a run-level failure occurs.
#[derive(Debug, Clone)]
pub struct ScanErrorEvent {
    pub message: String,
}
