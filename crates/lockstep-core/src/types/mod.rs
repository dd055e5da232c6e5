//! Shared type definitions used across the workspace.

pub mod collections;
pub mod diagnostic;
