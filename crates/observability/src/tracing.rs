//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: compact single-line output, filter taken
/// from `RUST_LOG` with an `info` default.
///
/// Idempotent; a second call leaves the existing subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
