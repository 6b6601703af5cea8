use std::str::FromStr;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Logs go to stderr so stdout stays free for
/// reports and completion scripts.
///
/// `log_level` is either a bare level (`info`) or a full filter directive
/// (`studio_pricing=debug,warn`). Unparseable values fall back to `warn`.
pub fn setup_logging(log_level: &str) {
    let filter = EnvFilter::from_str(log_level.trim()).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .compact();

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();

    tracing::debug!(log_level, "logging initialized");
}
