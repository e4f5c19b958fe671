//! Logging configuration for folioterm.
//!
//! Logs always go to stderr so that stdout carries nothing but command output.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Initializes stderr logging.
///
/// `verbose` raises the default level to `debug`; `RUST_LOG` still wins when set.
pub fn init_stderr_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { DEFAULT_FILTER };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
