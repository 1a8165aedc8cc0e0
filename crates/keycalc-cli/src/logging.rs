//! Log subscriber setup
//!
//! Logs go to stderr so `run` output on stdout stays machine readable.
//! `RUST_LOG` takes precedence over the `-q`/`-v` flags.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Builds the filter for a verbosity level, honouring `RUST_LOG`
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging(verbosity: Verbosity, use_color: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(false)
        .try_init()
        .is_ok()
}
