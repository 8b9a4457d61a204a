//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::ProbeConfig;

/// Shared application state, cloneable across handlers via the Arc-wrapped
/// probe profile.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProbeConfig>,
}

impl AppState {
    /// Creates a new application state from the given probe profile.
    pub fn new(config: ProbeConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
