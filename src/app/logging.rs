//! Logging configuration using tracing

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "AUTONAV_LOG";

/// Initialize the logging subsystem.
///
/// Logs go to stderr so stdout stays reserved for open requests. The level
/// defaults to `warn` and can be raised via `AUTONAV_LOG`:
///
/// ```bash
/// AUTONAV_LOG=debug autonav switch style src/app.ts
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded in another binary.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false))
        .try_init();
}
