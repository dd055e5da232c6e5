//! Magic-comment pattern matching.

use regex::Regex;

use lockstep_core::config::EngineConfig;
use lockstep_core::errors::ConfigError;

use crate::parsers::comments::CommentToken;

use super::types::MagicComment;

/// Named capture groups every pattern must declare.
const REQUIRED_GROUPS: [&str; 2] = ["id", "revision"];

/// Compiled magic-comment pattern.
///
/// Construction validates the pattern once — a missing `id` or `revision`
/// group fails here, before any file is scanned, instead of surfacing as
/// a confusing per-comment failure later. Matching is a pure function of
/// the comment text.
#[derive(Debug)]
pub struct CommentMatcher {
    regex: Regex,
    pattern: String,
}

impl CommentMatcher {
    /// Compile a pattern. The regex is anchored to the whole comment text;
    /// partial matches do not count.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let anchored = format!(r"\A(?:{pattern})\z");
        let regex = Regex::new(&anchored).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        for group in REQUIRED_GROUPS {
            if !regex.capture_names().flatten().any(|name| name == group) {
                return Err(ConfigError::MissingCaptureGroup {
                    group,
                    pattern: pattern.to_string(),
                });
            }
        }

        Ok(Self {
            regex,
            pattern: pattern.to_string(),
        })
    }

    /// Compile the configured pattern (or the default).
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::new(config.effective_pattern())
    }

    /// The pattern as configured, without the added anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Match one comment. Returns `None` for ordinary prose, partial
    /// matches, and matches where either group captured nothing or an
    /// empty string — a `MagicComment` always carries non-empty tokens.
    pub fn try_match(&self, comment: &CommentToken) -> Option<MagicComment> {
        let caps = self.regex.captures(&comment.text)?;
        let feature_id = caps.name("id")?.as_str();
        let revision = caps.name("revision")?.as_str();
        if feature_id.is_empty() || revision.is_empty() {
            return None;
        }

        Some(MagicComment {
            feature_id: feature_id.to_string(),
            revision: revision.to_string(),
            location: comment.location.clone(),
        })
    }
}
