//! Scanner configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the file scanner subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Default: 1MB (1_048_576).
    pub max_file_size: Option<u64>,
    /// Thread count for the walker and the file pass. 0 = one per core;
    /// 1 makes the file pass sequential over path-sorted results.
    pub threads: Option<usize>,
    /// Include glob patterns — if non-empty, only matching paths are scanned.
    /// Patterns use gitignore syntax (e.g., "src/**", "lib/**").
    #[serde(default)]
    pub include: Vec<String>,
    /// Additional ignore patterns beyond .gitignore/.lockstepignore.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    /// Returns the effective walker thread count, defaulting to 0.
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
