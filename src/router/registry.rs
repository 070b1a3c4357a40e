//! Function registry: the name-to-handler mapping the dispatcher consults.
//!
//! Two construction strategies share one contract: `SharedRegistry::eager`
//! builds the mapping at process start, `SharedRegistry::lazy` defers to the
//! first request behind a single-flight guard. Once populated the registry
//! is immutable and all reads are lock-free.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::OnceCell;

use super::error::DiscoveryError;
use super::handler::Handler;
use crate::logger;

/// One manifest entry: a function name and the constructor that loads it.
pub struct HandlerFactory {
    pub name: &'static str,
    pub build: fn() -> Result<Arc<dyn Handler>, DiscoveryError>,
}

/// A registered function as listed by the index endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionEntry {
    pub name: String,
    pub endpoint: String,
    pub description: String,
}

pub struct Registry {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            handlers: HashMap::new(),
        }
    }

    /// Build from a manifest, best-effort: an entry whose constructor fails
    /// or whose name collides is logged and skipped, never aborting the
    /// build for the remaining entries.
    pub fn from_manifest(manifest: &[HandlerFactory]) -> Self {
        let mut handlers: HashMap<String, Arc<dyn Handler>> = HashMap::new();

        for entry in manifest {
            match (entry.build)() {
                Ok(handler) => {
                    if handlers.contains_key(entry.name) {
                        logger::log_discovery_skipped(
                            entry.name,
                            &DiscoveryError::Duplicate(entry.name.to_string()),
                        );
                        continue;
                    }
                    handlers.insert(entry.name.to_string(), handler);
                }
                Err(err) => logger::log_discovery_skipped(entry.name, &err),
            }
        }

        Self { handlers }
    }

    pub fn lookup(&self, name: &str) -> Option<&Arc<dyn Handler>> {
        self.handlers.get(name)
    }

    /// Registered functions sorted by name, for stable listings.
    pub fn entries(&self) -> Vec<FunctionEntry> {
        let mut entries: Vec<FunctionEntry> = self
            .handlers
            .values()
            .map(|handler| FunctionEntry {
                name: handler.name().to_string(),
                endpoint: format!("/{}", handler.name()),
                description: handler.description().to_string(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Explicit static registration. A duplicate name here is a programming
/// defect, caught at build/test time.
pub struct RegistryBuilder {
    handlers: HashMap<String, Arc<dyn Handler>>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn register(mut self, handler: Arc<dyn Handler>) -> Self {
        let name = handler.name();
        let previous = self.handlers.insert(name.to_string(), handler);
        assert!(previous.is_none(), "duplicate handler name '{name}'");
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            handlers: self.handlers,
        }
    }
}

/// Process-lifetime registry handle.
///
/// The lazy variant keeps the manifest until the first `get` call; the
/// `OnceCell` guarantees a single build pass even when concurrent first
/// requests race to initialize it.
pub struct SharedRegistry {
    cell: OnceCell<Arc<Registry>>,
    manifest: Vec<HandlerFactory>,
}

impl SharedRegistry {
    /// Build the registry immediately (static strategy).
    pub fn eager(manifest: Vec<HandlerFactory>) -> Self {
        let registry = Arc::new(Registry::from_manifest(&manifest));
        Self {
            cell: OnceCell::new_with(Some(registry)),
            manifest,
        }
    }

    /// Defer construction to the first `get` call (dynamic strategy).
    pub fn lazy(manifest: Vec<HandlerFactory>) -> Self {
        Self {
            cell: OnceCell::new(),
            manifest,
        }
    }

    /// Fetch the registry, building it on first use. Concurrent callers
    /// share one build pass and observe the same contents.
    pub async fn get(&self) -> Arc<Registry> {
        let registry = self
            .cell
            .get_or_init(|| async { Arc::new(Registry::from_manifest(&self.manifest)) })
            .await;
        Arc::clone(registry)
    }

    /// Whether the one-time build has happened yet.
    pub fn is_built(&self) -> bool {
        self.cell.initialized()
    }
}
