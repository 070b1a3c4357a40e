// HTTP surface module
// Envelope shape, CORS header set, and response builders

pub mod cors;
mod envelope;
mod response;

pub use envelope::Envelope;
pub use response::{
    build_envelope_response, build_handler_error_response, build_not_found_response,
    build_payload_too_large_response, build_preflight_response,
};
