//! Diagnostic output setup.
//!
//! Diagnostics go to stderr and are filtered by `GREETER_LOG` (same syntax as
//! `RUST_LOG`). Without it, or when it does not parse, only warnings are shown.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GREETER_LOG";

/// Installs the global stderr subscriber.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
