// Function router core
// Registry construction, dispatch, and the index responder

mod dispatch;
pub mod error;
mod handler;
mod index;
mod registry;

// Re-export public types
pub use dispatch::handle_request;
pub use handler::{FnBody, FnRequest, FnResponse, Handler};
pub use registry::{FunctionEntry, HandlerFactory, Registry, SharedRegistry};
