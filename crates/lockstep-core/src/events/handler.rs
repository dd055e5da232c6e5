//! Event handler trait implemented by hosts.

use crate::types::diagnostic::Diagnostic;

use super::types::*;

/// Receives scan lifecycle events and violations.
///
/// All methods are optional. Handlers may be called from multiple scan
/// workers concurrently, so implementations must be `Send + Sync`. The
/// delivery order of events from *different* files is unspecified; events
/// for a single file arrive in source order.
pub trait LockstepEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}

    fn on_scan_progress(&self, _event: &ScanProgressEvent) {}

    fn on_file_scanned(&self, _event: &FileScannedEvent) {}

    /// A revision conflict, anchored at the offending comment.
    fn on_violation(&self, _diagnostic: &Diagnostic) {}

    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}

    fn on_scan_error(&self, _event: &ScanErrorEvent) {}
}

/// Handler that drops every event. Useful for tests and embedding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEventHandler;

impl LockstepEventHandler for NoopEventHandler {}
