//! CORS header set applied to every outbound response.
//!
//! The set is constant for the process lifetime and is merged into success,
//! error, and preflight responses alike; on conflict the router's values
//! replace whatever a handler set.

use hyper::header::HeaderValue;

use crate::router::FnResponse;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";

const HEADER_SET: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", ALLOW_ORIGIN),
    ("Access-Control-Allow-Methods", ALLOW_METHODS),
    ("Access-Control-Allow-Headers", ALLOW_HEADERS),
];

/// Merge the CORS header set into a response; CORS values win on conflict,
/// everything else is preserved verbatim.
pub fn apply(mut response: FnResponse) -> FnResponse {
    for (name, value) in HEADER_SET {
        response
            .headers_mut()
            .insert(name, HeaderValue::from_static(value));
    }
    response
}
