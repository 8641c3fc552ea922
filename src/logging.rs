//! Structured logging setup
//!
//! Output respects the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=mdpreview::server=debug` - module-level filtering
//!
//! Without `RUST_LOG`, the crate logs at info level and dependencies at warn.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn,mdpreview=info";

/// Initializes the global tracing subscriber.
///
/// Later calls are ignored, so tests and binaries may both call it.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init();
}
