//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "erad_core=info,erad_fragility=info,erad_simulation=info";

/// Initialize the ERAD logging system.
///
/// Reads the `ERAD_LOG` environment variable for per-crate log levels.
/// Format: `ERAD_LOG=erad_simulation=debug,erad_fragility=warn`
///
/// Falls back to `info` for every ERAD crate if `ERAD_LOG` is unset or
/// invalid. Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber installed by the host application takes precedence.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
