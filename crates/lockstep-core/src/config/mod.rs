//! Configuration loading and defaults.
//!
//! Configuration lives in `lockstep.toml` at the scan root. Every field is
//! optional; `effective_*()` accessors supply the defaults so a missing or
//! empty file behaves identically to no file at all.

pub mod engine_config;
pub mod scan_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use engine_config::{EngineConfig, DEFAULT_PATTERN, ENABLE_ENV_VAR};
pub use scan_config::ScanConfig;

/// Top-level configuration: `[engine]` and `[scan]` tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LockstepConfig {
    pub engine: EngineConfig,
    pub scan: ScanConfig,
}

/// Name of the config file looked up at the scan root.
pub const CONFIG_FILE_NAME: &str = "lockstep.toml";

impl LockstepConfig {
    /// Load configuration from an explicit file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `lockstep.toml` from the scan root, falling back to defaults
    /// when the file does not exist. A file that exists but cannot be read
    /// or parsed is still an error — silently ignoring a broken config
    /// hides misconfigured patterns.
    pub fn load_or_default(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            tracing::debug!(root = %root.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Whether the engine should run at all this invocation.
    ///
    /// The `LOCKSTEP_ENABLED` environment variable wins over the config
    /// file when set; unset defers to `[engine] enabled` (default true).
    /// When this returns false the host must skip the engine entirely.
    pub fn engine_enabled(&self) -> bool {
        match std::env::var(ENABLE_ENV_VAR) {
            Ok(v) => match v.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => false,
                "1" | "true" | "on" => true,
                _ => self.engine.effective_enabled(),
            },
            Err(_) => self.engine.effective_enabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LockstepConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(config.engine.effective_pattern(), DEFAULT_PATTERN);
        assert!(config.engine.effective_enabled());
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            "[engine]\npattern = 'rev:(?P<id>\\w+)/(?P<revision>\\w+)'\n\n[scan]\nthreads = 2"
        )
        .unwrap();

        let config = LockstepConfig::load_or_default(dir.path()).unwrap();
        assert_eq!(
            config.engine.effective_pattern(),
            "rev:(?P<id>\\w+)/(?P<revision>\\w+)"
        );
        assert_eq!(config.scan.effective_threads(), 2);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[engine\nenabled = maybe").unwrap();

        let err = LockstepConfig::load_or_default(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
