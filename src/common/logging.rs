//! Logging and tracing configuration
//!
//! Only the binary installs a subscriber; the library core emits all of its
//! diagnostics through the [`crate::observer::DispatchObserver`] seam, whose
//! default implementation writes `tracing` events.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing for the CLI (stdout logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is INFO for this crate, WARN for dependencies;
/// `quiet` drops the crate to ERROR.
pub fn init_cli(quiet: bool) {
    let default = if quiet {
        "stagehand=error"
    } else {
        "stagehand=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
