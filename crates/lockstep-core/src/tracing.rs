//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable controlling log verbosity (EnvFilter syntax).
pub const LOG_ENV_VAR: &str = "LOCKSTEP_LOG";

/// Install the global tracing subscriber.
///
/// Filter comes from `LOCKSTEP_LOG` (default `warn`); output goes to
/// stderr so diagnostics on stdout stay machine-readable. Safe to call
/// more than once — later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
