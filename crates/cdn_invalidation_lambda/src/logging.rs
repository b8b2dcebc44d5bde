//! Structured JSON logging for the Lambda runtime.
//!
//! CloudWatch captures stdout line by line, so every event is a single JSON
//! object. The filter is taken from `RUST_LOG` and defaults to `info`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const DEFAULT_LOG_FILTER: &str = "info";

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber once per process. Safe to call repeatedly.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .json()
                .with_target(true)
                .with_ansi(false)
                .without_time()
                .with_filter(log_filter()),
        );

        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already installed");
        }
    });
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
