//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber, filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only warnings and errors are shown, or everything down
/// to debug when `verbose` is set. Subsequent calls are no-ops.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
