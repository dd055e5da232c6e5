//! Scan lifecycle events.
//!
//! The engine reports progress and violations through a handler trait the
//! host implements; every method defaults to a no-op so handlers opt into
//! exactly the callbacks they care about.

pub mod handler;
pub mod types;

pub use handler::{LockstepEventHandler, NoopEventHandler};
pub use types::{
    FileScannedEvent, ScanCompleteEvent, ScanErrorEvent, ScanProgressEvent, ScanStartedEvent,
};
