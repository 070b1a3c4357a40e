// Application state module
// Runtime state shared across all connections

use std::sync::atomic::AtomicBool;

use super::types::Config;
use crate::functions;
use crate::router::{HandlerFactory, SharedRegistry};

/// Application state
pub struct AppState {
    pub config: Config,
    pub registry: SharedRegistry,

    // Cached config values for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` with the built-in function manifest installed.
    pub fn new(config: &Config) -> Self {
        Self::with_manifest(config, functions::manifest())
    }

    /// Create `AppState` from an explicit manifest.
    ///
    /// The registry construction strategy follows `registry.lazy_init`:
    /// eager builds happen here, lazy builds on the first request.
    pub fn with_manifest(config: &Config, manifest: Vec<HandlerFactory>) -> Self {
        let registry = if config.registry.lazy_init {
            SharedRegistry::lazy(manifest)
        } else {
            SharedRegistry::eager(manifest)
        };

        Self {
            config: config.clone(),
            registry,
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
