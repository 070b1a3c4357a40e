//! Index responder: answers the root path with a summary of registered
//! functions. Reads live registry state; the dispatcher forces lazy
//! construction before calling in here.

use hyper::StatusCode;
use serde_json::Value;

use super::handler::FnResponse;
use super::registry::Registry;
use crate::http::{self, Envelope};

pub fn build_index_response(registry: &Registry) -> FnResponse {
    let entries = registry.entries();
    let message = format!("{} function(s) available", entries.len());
    let data = serde_json::to_value(entries).unwrap_or(Value::Null);

    http::build_envelope_response(StatusCode::OK, &Envelope::ok(message, data))
}
