//! Clock readout function.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use hyper::StatusCode;

use crate::http::{self, Envelope};
use crate::router::error::HandlerError;
use crate::router::{FnRequest, FnResponse, Handler};

pub struct Time;

#[async_trait]
impl Handler for Time {
    fn name(&self) -> &'static str {
        "time"
    }

    fn description(&self) -> &'static str {
        "Returns the current server time (UTC)"
    }

    async fn invoke(&self, _req: FnRequest) -> Result<FnResponse, HandlerError> {
        let now = Utc::now();
        let envelope = Envelope::ok(
            "Current server time",
            serde_json::json!({
                "iso": now.to_rfc3339_opts(SecondsFormat::Millis, true),
                "unix_ms": now.timestamp_millis(),
                "timezone": "UTC",
            }),
        );
        Ok(http::build_envelope_response(StatusCode::OK, &envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{request, response_json};
    use hyper::Method;

    #[tokio::test]
    async fn reports_the_current_time() {
        let response = Time.invoke(request(Method::GET, "/time")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["timezone"], "UTC");
        assert!(json["data"]["unix_ms"].as_i64().unwrap() > 0);
        assert!(chrono::DateTime::parse_from_rfc3339(json["data"]["iso"].as_str().unwrap()).is_ok());
    }
}
