//! Consistency-engine configuration.

use serde::{Deserialize, Serialize};

/// Default magic-comment pattern: a `[feature-revision]` prefix followed by
/// `id:` and `revision:` fields. Applied to the comment's normalized
/// content (comment markers already stripped), so it is language-agnostic.
pub const DEFAULT_PATTERN: &str =
    r"\[feature-revision\]\s+id:\s*(?P<id>[^\s,]+),\s*revision:\s*(?P<revision>\S+)";

/// Environment variable overriding `[engine] enabled` for one invocation.
/// `0`/`false`/`off` disables, `1`/`true`/`on` enables, unset defers to
/// the config file.
pub const ENABLE_ENV_VAR: &str = "LOCKSTEP_ENABLED";

/// Configuration for the consistency-tracking engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Magic-comment pattern. Must declare named capture groups `id` and
    /// `revision`; validated when the engine is constructed, not on first
    /// use. Default: [`DEFAULT_PATTERN`].
    pub pattern: Option<String>,
    /// Whether the engine runs at all. Default: true.
    pub enabled: Option<bool>,
}

impl EngineConfig {
    /// Returns the configured pattern, defaulting to [`DEFAULT_PATTERN`].
    pub fn effective_pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }

    /// Returns whether the engine is enabled, defaulting to true.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LockstepConfig;

    #[test]
    fn test_effective_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.effective_pattern(), DEFAULT_PATTERN);
        assert!(config.effective_enabled());
    }

    // The only test in the workspace that touches LOCKSTEP_ENABLED; keeping
    // it in one place avoids races between parallel tests on process env.
    #[test]
    fn test_env_toggle_precedence() {
        let mut config = LockstepConfig::default();

        std::env::remove_var(ENABLE_ENV_VAR);
        assert!(config.engine_enabled());

        config.engine.enabled = Some(false);
        assert!(!config.engine_enabled());

        std::env::set_var(ENABLE_ENV_VAR, "1");
        assert!(config.engine_enabled(), "env var should win over config");

        std::env::set_var(ENABLE_ENV_VAR, "off");
        config.engine.enabled = Some(true);
        assert!(!config.engine_enabled(), "env var should win over config");

        std::env::set_var(ENABLE_ENV_VAR, "weird-value");
        assert!(config.engine_enabled(), "unrecognized value defers to config");

        std::env::remove_var(ENABLE_ENV_VAR);
    }
}
