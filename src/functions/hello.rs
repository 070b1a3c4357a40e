//! Greeting function.
//!
//! GET reads an optional `?name=` query parameter; POST reads an optional
//! JSON body `{"name": "..."}`. Defaults to greeting the world.

use async_trait::async_trait;
use http_body_util::BodyExt;
use hyper::{Method, StatusCode};
use serde::Deserialize;

use crate::http::{self, Envelope};
use crate::router::error::HandlerError;
use crate::router::{FnRequest, FnResponse, Handler};

#[derive(Debug, Deserialize)]
struct GreetPayload {
    name: Option<String>,
}

pub struct Hello;

#[async_trait]
impl Handler for Hello {
    fn name(&self) -> &'static str {
        "hello"
    }

    fn description(&self) -> &'static str {
        "Returns a greeting; accepts ?name= or a JSON body"
    }

    async fn invoke(&self, req: FnRequest) -> Result<FnResponse, HandlerError> {
        let name = if req.method() == Method::POST {
            let body = req.into_body().collect().await?.to_bytes();
            if body.is_empty() {
                None
            } else {
                let payload: GreetPayload = serde_json::from_slice(&body)?;
                payload.name
            }
        } else {
            query_param(req.uri().query(), "name")
        };

        let name = name.unwrap_or_else(|| "world".to_string());
        let envelope = Envelope::ok(
            format!("Hello, {name}!"),
            serde_json::json!({ "name": name }),
        );
        Ok(http::build_envelope_response(StatusCode::OK, &envelope))
    }
}

/// Minimal query-string lookup; no percent-decoding, the sample UI sends
/// plain ASCII names.
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key && !v.is_empty()).then(|| v.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{body_from, request, request_with_body, response_json};

    #[tokio::test]
    async fn greets_the_world_by_default() {
        let response = Hello
            .invoke(request(Method::GET, "/hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Hello, world!");
    }

    #[tokio::test]
    async fn greets_the_query_parameter() {
        let response = Hello
            .invoke(request(Method::GET, "/hello?name=Ada"))
            .await
            .unwrap();

        let json = response_json(response).await;
        assert_eq!(json["message"], "Hello, Ada!");
        assert_eq!(json["data"]["name"], "Ada");
    }

    #[tokio::test]
    async fn greets_the_posted_name() {
        let req = request_with_body(Method::POST, "/hello", body_from(r#"{"name":"Grace"}"#));
        let response = Hello.invoke(req).await.unwrap();

        let json = response_json(response).await;
        assert_eq!(json["message"], "Hello, Grace!");
    }

    #[tokio::test]
    async fn rejects_malformed_json_body() {
        let req = request_with_body(Method::POST, "/hello", body_from("not json"));
        let err = Hello.invoke(req).await.unwrap_err();
        assert!(matches!(err, HandlerError::Payload(_)));
    }

    #[test]
    fn query_param_lookup() {
        assert_eq!(query_param(Some("name=Ada&x=1"), "name"), Some("Ada".to_string()));
        assert_eq!(query_param(Some("name="), "name"), None);
        assert_eq!(query_param(Some("other=1"), "name"), None);
        assert_eq!(query_param(None, "name"), None);
    }
}
