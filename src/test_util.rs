// Shared helpers for router tests: request/body construction, canned
// handlers, and ready-made application state.

use std::sync::Arc;

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response, StatusCode};

use crate::config::{
    AppState, Config, HttpConfig, LoggingConfig, PerformanceConfig, RegistryConfig, ServerConfig,
};
use crate::router::error::HandlerError;
use crate::router::{FnBody, FnRequest, FnResponse, Handler, HandlerFactory};

pub fn empty_body() -> FnBody {
    Full::new(Bytes::new()).map_err(|never| match never {}).boxed()
}

pub fn body_from(bytes: impl Into<Bytes>) -> FnBody {
    Full::new(bytes.into()).map_err(|never| match never {}).boxed()
}

pub fn request(method: Method, path: &str) -> FnRequest {
    request_with_body(method, path, empty_body())
}

pub fn request_with_body(method: Method, path: &str, body: FnBody) -> FnRequest {
    Request::builder()
        .method(method)
        .uri(path)
        .body(body)
        .unwrap()
}

pub async fn response_bytes(response: FnResponse) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn response_json(response: FnResponse) -> serde_json::Value {
    serde_json::from_slice(&response_bytes(response).await).unwrap()
}

/// Replies 200 with its own body, marker header, and a CORS value the
/// router is expected to override.
pub struct Echo;

#[async_trait]
impl Handler for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "test echo"
    }

    async fn invoke(&self, _req: FnRequest) -> Result<FnResponse, HandlerError> {
        let mut response = Response::builder()
            .status(StatusCode::OK)
            .header("X-Handler", "echo")
            .body(Full::new(Bytes::from_static(b"echo")))
            .unwrap();
        response.headers_mut().insert(
            "Access-Control-Allow-Origin",
            HeaderValue::from_static("https://handler.example"),
        );
        Ok(response)
    }
}

/// Always fails with a handler error.
pub struct Boom;

#[async_trait]
impl Handler for Boom {
    fn name(&self) -> &'static str {
        "boom"
    }

    fn description(&self) -> &'static str {
        "test failure"
    }

    async fn invoke(&self, _req: FnRequest) -> Result<FnResponse, HandlerError> {
        Err(HandlerError::Message("boom".to_string()))
    }
}

/// Always panics during invocation.
pub struct Panicker;

#[async_trait]
impl Handler for Panicker {
    fn name(&self) -> &'static str {
        "panic"
    }

    fn description(&self) -> &'static str {
        "test panic"
    }

    async fn invoke(&self, _req: FnRequest) -> Result<FnResponse, HandlerError> {
        panic!("handler panicked");
    }
}

/// Configurable name/description, fixed 200 reply.
pub struct StaticReply {
    name: &'static str,
    description: &'static str,
}

impl StaticReply {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

#[async_trait]
impl Handler for StaticReply {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    async fn invoke(&self, _req: FnRequest) -> Result<FnResponse, HandlerError> {
        Ok(Response::new(Full::new(Bytes::from_static(b"ok"))))
    }
}

pub fn test_config(lazy_init: bool) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: None,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            access_log: false,
            show_headers: false,
        },
        performance: PerformanceConfig {
            keep_alive_timeout: 75,
            read_timeout: 30,
            write_timeout: 30,
            max_connections: None,
        },
        http: HttpConfig {
            max_body_size: 1024,
        },
        registry: RegistryConfig { lazy_init },
    }
}

/// Manifest of the canned test handlers: boom, echo, panic.
pub fn test_manifest() -> Vec<HandlerFactory> {
    vec![
        HandlerFactory {
            name: "echo",
            build: || Ok(Arc::new(Echo) as Arc<dyn Handler>),
        },
        HandlerFactory {
            name: "boom",
            build: || Ok(Arc::new(Boom) as Arc<dyn Handler>),
        },
        HandlerFactory {
            name: "panic",
            build: || Ok(Arc::new(Panicker) as Arc<dyn Handler>),
        },
    ]
}

pub fn test_state(lazy_init: bool) -> Arc<AppState> {
    test_state_with_manifest(test_manifest(), lazy_init)
}

pub fn test_state_with_manifest(
    manifest: Vec<HandlerFactory>,
    lazy_init: bool,
) -> Arc<AppState> {
    Arc::new(AppState::with_manifest(&test_config(lazy_init), manifest))
}
