//! Router error taxonomy.
//!
//! Discovery failures are isolated per manifest entry and never abort the
//! registry build; handler failures are isolated per request and surface as
//! a 500 envelope at the dispatch boundary.

use thiserror::Error;

/// A manifest entry failed to produce a handler. Non-fatal: the entry is
/// logged and left out of the registry.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to load: {reason}")]
    Load { reason: String },

    #[error("duplicate handler name '{0}'")]
    Duplicate(String),
}

/// A handler failed while answering a request.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to read request body: {0}")]
    Body(#[from] hyper::Error),

    #[error("invalid request payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{0}")]
    Message(String),
}
