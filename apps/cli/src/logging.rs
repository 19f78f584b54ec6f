//! # Logging Setup
//!
//! The subscriber is installed before configuration is read, so warnings
//! raised while loading config are visible.
//!
//! ```text
//! startup:  RUST_LOG ──► PRICETAG_LOG_LEVEL ──► "info"
//!                │
//!                │ (not set)
//!                ▼
//! config:   [logging] level ──reload──► filter
//! ```
//!
//! When `RUST_LOG` is set it stays in charge for the whole run.

use tracing::warn;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Level used when nothing else is configured.
pub const FALLBACK_LEVEL: &str = "info";

const LEVEL_ENV: &str = "PRICETAG_LOG_LEVEL";

/// Lets the configured level replace the startup filter.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

/// Installs the global subscriber: env filter plus `fmt` output with targets.
pub fn init() -> LogHandle {
    let (directives, pinned) = startup_directives(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        std::env::var(LEVEL_ENV).ok(),
    );
    let filter =
        EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    LogHandle {
        filter: handle,
        pinned,
    }
}

/// Picks the startup filter. The flag is true when `RUST_LOG` decided it.
fn startup_directives(rust_log: Option<String>, level: Option<String>) -> (String, bool) {
    match (rust_log, level) {
        (Some(directives), _) if !directives.trim().is_empty() => (directives, true),
        (_, Some(level)) if !level.trim().is_empty() => (level, false),
        _ => (FALLBACK_LEVEL.to_string(), false),
    }
}

impl LogHandle {
    /// Switches to the configured level unless `RUST_LOG` is in charge.
    pub fn apply_level(&self, level: &str) {
        if self.pinned {
            return;
        }

        match EnvFilter::try_new(level) {
            Ok(filter) => {
                if let Err(e) = self.filter.reload(filter) {
                    warn!(error = %e, "Failed to apply log level");
                }
            }
            Err(e) => warn!(level = %level, error = %e, "Ignoring invalid log level"),
        }
    }
}
