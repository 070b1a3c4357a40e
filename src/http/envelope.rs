//! Uniform JSON envelope for router-generated responses.
//!
//! Handler responses pass through the dispatcher untouched; the envelope
//! shape only applies to what the router itself produces (index, 404, 500,
//! 413), though handlers are free to reuse it.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    pub timestamp: String,
}

impl Envelope {
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self::new(true, message.into(), Some(data))
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(false, message.into(), None)
    }

    fn new(success: bool, message: String, data: Option<Value>) -> Self {
        Self {
            success,
            message,
            data,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
