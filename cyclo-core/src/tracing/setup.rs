//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the cyclo tracing/logging system.
///
/// Reads the `CYCLO_LOG` environment variable for per-subsystem log levels.
/// Format: `CYCLO_LOG=cyclo_analysis=debug,cyclo_core=info`
///
/// Falls back to `cyclo=info` if `CYCLO_LOG` is not set or is invalid.
///
/// This function is idempotent, calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CYCLO_LOG")
            .unwrap_or_else(|_| EnvFilter::new("cyclo=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
