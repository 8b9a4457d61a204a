//! Tracing initialization shared by the probe binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DEFAULT_LOG_FILTER;

/// Initialize tracing with priority: RUST_LOG env var > crate default.
///
/// Must be called once, before the first log statement; calling it twice
/// panics because the global subscriber is already set.
pub fn init() {
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
