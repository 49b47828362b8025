//! Diagnostics go to stderr. Stdout carries exactly one JSON object and
//! nothing else.
//!
//! The filter comes from `RUST_LOG` (e.g. `RUST_LOG=api_bridge_core=debug`)
//! and defaults to `warn`.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded in tests.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
