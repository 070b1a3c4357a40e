//! HTTP response building module
//!
//! Builders for the router-generated responses, decoupled from dispatch
//! logic. Builder failures never panic on the request path; they fall back
//! to a plain response with an error log.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::envelope::Envelope;
use crate::router::FnResponse;

/// Serialize an envelope into a JSON response with the given status.
pub fn build_envelope_response(status: StatusCode, envelope: &Envelope) -> FnResponse {
    let json = match serde_json::to_string(envelope) {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize envelope: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", "application/json")
                .body(Full::new(Bytes::from(
                    r#"{"success":false,"message":"Internal server error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Error"))));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_u16(), &e);
            Response::new(Full::new(Bytes::from("Error")))
        })
}

/// Build the CORS preflight response: 200, empty body. The dispatcher
/// merges the CORS header set before this leaves the router.
pub fn build_preflight_response() -> FnResponse {
    Response::builder()
        .status(StatusCode::OK)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(200, &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build the 404 envelope for an unregistered function name.
pub fn build_not_found_response(name: &str) -> FnResponse {
    build_envelope_response(
        StatusCode::NOT_FOUND,
        &Envelope::error(format!("Function '{name}' not found")),
    )
}

/// Build the 500 envelope for a handler that failed during invocation.
/// The message stays sanitized; failure details go to the error log.
pub fn build_handler_error_response(name: &str) -> FnResponse {
    build_envelope_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &Envelope::error(format!("Function '{name}' failed")),
    )
}

/// Build the 413 envelope for an oversized declared request body.
pub fn build_payload_too_large_response(max_body_size: u64) -> FnResponse {
    build_envelope_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        &Envelope::error(format!("Request body exceeds {max_body_size} bytes")),
    )
}

/// Log response build error
fn log_build_error(status: u16, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
