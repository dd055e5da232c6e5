//! File discovery and run orchestration.

pub mod language;
pub mod scanner;
pub mod types;
pub mod walker;

pub use language::Language;
pub use scanner::Scanner;
pub use types::{DiscoveredFile, RunReport, ScanStats};
