//! Logging infrastructure for health_core.
//!
//! The library itself only emits `tracing` events (one debug event per
//! skipped formula module); these helpers let embedding binaries and tests
//! wire those events to a subscriber without depending on
//! tracing-subscriber themselves.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with sensible defaults
///
/// Compact format, INFO by default, overridable via RUST_LOG.
/// Panics if a global subscriber is already installed; embedders that may
/// initialize twice should use [`try_init`].
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

/// Like [`init`], but a no-op when a global subscriber already exists.
///
/// Useful in tests, where several cases may race to install one.
pub fn try_init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
