//! State shared by every `/calculate` request.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::formatting::FormatConfig;

/// Shared application state.
///
/// The configuration is read-only after startup, so clones share one
/// [`ConfigLoader`] without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Wraps a loaded configuration for use as router state.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Currency format applied to rendered statements.
    pub fn formatting(&self) -> &FormatConfig {
        self.config.formatting()
    }

    /// Rule set version reported in every response.
    pub fn engine_version(&self) -> &str {
        &self.config.engine().version
    }
}
