//! Host-consumable diagnostic types.
//!
//! A `Diagnostic` is the only output the engine produces: one per revision
//! conflict, anchored at the offending comment. Locations are carried for
//! reporting only — the engine never compares them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a comment within its source file. Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SourceLocation {
    /// Sort key for stable report ordering: (file, line, column).
    pub fn sort_key(&self) -> (&str, u32, u32) {
        (&self.file, self.line, self.column)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Diagnostic severity. The consistency engine only ever emits `Error`;
/// the enum exists so hosts consume a stable, extensible shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single revision-consistency violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub location: SourceLocation,
    /// Feature id carried by the offending comment.
    pub feature_id: String,
    /// Revision token that disagreed with the registry.
    pub revision: String,
    pub message: String,
    pub severity: Severity,
}
