//! Request dispatch module
//!
//! Entry point for HTTP request processing: preflight short-circuit, path
//! parsing, registry lookup, error-isolated handler invocation, and the
//! CORS merge every outbound response receives.

use std::convert::Infallible;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use futures::FutureExt;
use hyper::body::Body;
use hyper::Method;

use super::handler::{FnRequest, FnResponse, Handler};
use super::index;
use crate::config::AppState;
use crate::http::{self, cors};
use crate::logger;

/// Main entry point for HTTP request handling.
///
/// Never returns an error: every failure path terminates in a well-formed
/// response carrying the CORS header set.
pub async fn handle_request(
    req: FnRequest,
    state: Arc<AppState>,
) -> Result<FnResponse, Infallible> {
    let access_log = state.cached_access_log.load(Ordering::Relaxed);
    if access_log {
        logger::log_request(req.method(), req.uri(), req.version());
    }
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let response = dispatch(req, &state).await;

    if access_log {
        let size = response.body().size_hint().exact().unwrap_or(0);
        logger::log_response(response.status(), size);
    }

    Ok(cors::apply(response))
}

async fn dispatch(req: FnRequest, state: &Arc<AppState>) -> FnResponse {
    // Preflight short-circuits before any registry access
    if req.method() == Method::OPTIONS {
        return http::build_preflight_response();
    }

    if let Some(response) = check_body_size(&req, state.config.http.max_body_size) {
        return response;
    }

    // First touch of the registry; under the lazy strategy this is the
    // single-flight build trigger
    let registry = state.registry.get().await;

    let path = req.uri().path().to_owned();
    match function_name(&path) {
        None => index::build_index_response(&registry),
        Some(name) => match registry.lookup(name) {
            Some(handler) => {
                let handler = Arc::clone(handler);
                invoke_handler(name, &handler, req).await
            }
            None => {
                logger::log_warning(&format!("Function '{name}' not found"));
                http::build_not_found_response(name)
            }
        },
    }
}

/// Invoke a handler with the original request, isolating both `Err` returns
/// and panics so nothing propagates past the dispatch boundary.
async fn invoke_handler(name: &str, handler: &Arc<dyn Handler>, req: FnRequest) -> FnResponse {
    match AssertUnwindSafe(handler.invoke(req)).catch_unwind().await {
        Ok(Ok(response)) => response,
        Ok(Err(err)) => {
            logger::log_handler_error(name, &err);
            http::build_handler_error_response(name)
        }
        Err(_) => {
            logger::log_error(&format!("Function '{name}' panicked during invocation"));
            http::build_handler_error_response(name)
        }
    }
}

/// Extract the function name: the first path segment. `None` means the root
/// path, i.e. the index. Deeper path structure is the handler's own concern.
fn function_name(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        return None;
    }
    rest.split('/').next()
}

/// Validate the declared Content-Length against the configured limit.
/// Unparsable values are logged and waved through; hyper enforces framing.
fn check_body_size(req: &FnRequest, max_body_size: u64) -> Option<FnResponse> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_payload_too_large_response(max_body_size))
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
