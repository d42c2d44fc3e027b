//! Logging initialization
//!
//! `tracing-subscriber` with an `EnvFilter`: `RUST_LOG` wins when set,
//! otherwise the configured level applies.

use crate::config::ServerConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize global logging.
///
/// Safe to call multiple times - will only initialize once. Tests that
/// install their own subscriber are left alone.
pub fn init_logging(config: &ServerConfig) {
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("tracing subscriber already initialized, skipping");
        return;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Use try_init to avoid panicking if another thread set the subscriber
    // between our has_been_set() check and now
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init();
}
