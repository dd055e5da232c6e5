//! Stable error codes for host consumption.
//!
//! Hosts (CI wrappers, editor integrations) match on these strings rather
//! than on display text, so the constants here are append-only.

pub const CONFIG_MISSING_CAPTURE_GROUP: &str = "CONFIG_MISSING_CAPTURE_GROUP";
pub const CONFIG_INVALID_PATTERN: &str = "CONFIG_INVALID_PATTERN";
pub const CONFIG_READ_FAILED: &str = "CONFIG_READ_FAILED";
pub const CONFIG_PARSE_FAILED: &str = "CONFIG_PARSE_FAILED";
pub const SCAN_WALK_FAILED: &str = "SCAN_WALK_FAILED";
pub const SCAN_IO_FAILED: &str = "SCAN_IO_FAILED";

/// Maps every error variant to a stable code string.
pub trait LockstepErrorCode {
    fn error_code(&self) -> &'static str;
}
