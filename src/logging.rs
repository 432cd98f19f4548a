//! Diagnostics for both binaries, written to stderr.
//!
//! The headless binary prints generations to stdout; tracing output never
//! mixes with it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// Reads `RUST_LOG`, falling back to `default_filter` when it is unset or
/// invalid, e.g. `RUST_LOG=life_board=debug` to see every generation.
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
