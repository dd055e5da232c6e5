//! Parallel file walker using the `ignore` crate's `WalkParallel`.
//!
//! Supports `.lockstepignore` (gitignore syntax, hierarchical) plus a set
//! of default ignore patterns for build artifacts and vendored code.

use std::path::Path;

use crossbeam_channel as channel;
use lockstep_core::config::ScanConfig;
use lockstep_core::errors::ScanError;

use super::language::Language;
use super::types::DiscoveredFile;

/// Default ignore patterns applied to every scan.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "target",
    "__pycache__",
    ".pytest_cache",
    "coverage",
    "vendor",
    ".venv",
    "venv",
    ".bundle",
    "tmp",
    "log",
];

/// Walk a directory tree in parallel, collecting discovered files.
///
/// Respects `.gitignore`, `.lockstepignore`, and the default ignore
/// patterns. Returns files sorted by path for deterministic discovery
/// order (scan *completion* order under parallelism is still up to the
/// scheduler).
pub fn walk_directory(root: &Path, config: &ScanConfig) -> Result<Vec<DiscoveredFile>, ScanError> {
    if !root.exists() {
        return Err(ScanError::Walk {
            message: format!("scan root does not exist: {}", root.display()),
        });
    }

    let (tx, rx) = channel::unbounded();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .add_custom_ignore_filename(".lockstepignore")
        .max_filesize(Some(config.effective_max_file_size()))
        .follow_links(config.effective_follow_symlinks());

    let threads = config.effective_threads();
    if threads > 0 {
        builder.threads(threads);
    }

    // Build overrides: include patterns (whitelist) + ignore patterns
    // (blacklist). Positive gitignore-syntax patterns whitelist, negated
    // ones blacklist; the ignore crate evaluates them in order.
    let mut overrides = ignore::overrides::OverrideBuilder::new(root);
    if !config.include.is_empty() {
        for pattern in &config.include {
            let _ = overrides.add(pattern);
        }
    }
    for pattern in DEFAULT_IGNORES {
        let _ = overrides.add(&format!("!{}/**", pattern));
        let _ = overrides.add(&format!("!{}", pattern));
    }
    for pattern in &config.extra_ignore {
        let _ = overrides.add(&format!("!{}", pattern));
    }
    if let Ok(built) = overrides.build() {
        builder.overrides(built);
    }

    let walker = builder.build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => return ignore::WalkState::Continue,
            };

            // Only process regular files
            match entry.file_type() {
                Some(ft) if ft.is_file() => {}
                _ => return ignore::WalkState::Continue,
            }

            let path = entry.path().to_path_buf();
            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(_) => return ignore::WalkState::Continue,
            };

            let language =
                Language::from_extension(path.extension().and_then(|e| e.to_str()));

            let _ = tx.send(DiscoveredFile {
                path,
                file_size: metadata.len(),
                language,
            });

            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<DiscoveredFile> = rx.into_iter().collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
