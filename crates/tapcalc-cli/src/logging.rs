//! Tracing subscriber setup

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber; `RUST_LOG` wins over the verbosity default
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
