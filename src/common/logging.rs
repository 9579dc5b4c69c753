//! Diagnostic logging using tracing
//!
//! Diagnostics always go to stderr so that stdout carries nothing but the
//! diff report. Verbosity follows `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::common::error::DiffError;
use crate::common::result::DiffResult;

/// Initialize the tracing subscriber
///
/// # Example RUST_LOG values
/// - `RUST_LOG=info` - summary of the computed diff
/// - `RUST_LOG=manifest_diff=debug` - per-manifest load and index details
///
/// # Errors
/// Returns an error if a global subscriber has already been installed
pub fn init() -> DiffResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| DiffError::internal_error_with_source("Failed to initialize tracing", e))
}
