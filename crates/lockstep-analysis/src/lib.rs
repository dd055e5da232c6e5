//! # lockstep-analysis
//!
//! Analysis engine for the lockstep revision checker.
//! Contains the file scanner, tree-sitter comment parsers, and the
//! revision consistency engine (matcher, registry, pipeline).

pub mod engine;
pub mod parsers;
pub mod scanner;

pub use scanner::scanner::Scanner;
pub use scanner::types::RunReport;
