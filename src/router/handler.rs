//! Handler trait and the request/response types it consumes.

use async_trait::async_trait;
use http_body_util::combinators::BoxBody;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response};

use super::error::HandlerError;

/// Request body handed to handlers. Boxed so the production body
/// (`hyper::body::Incoming`) and in-memory test bodies share one signature.
pub type FnBody = BoxBody<Bytes, hyper::Error>;

/// The request value a registered function receives.
pub type FnRequest = Request<FnBody>;

/// The response value a registered function produces.
pub type FnResponse = Response<Full<Bytes>>;

/// A named unit of request-handling logic.
///
/// Implementations are registered once, owned by the registry for the
/// process lifetime, and invoked concurrently; they must not rely on the
/// router for any serialization.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Unique registry key; lowercase and URL-safe.
    fn name(&self) -> &'static str;

    /// One-line summary shown by the index endpoint.
    fn description(&self) -> &'static str;

    /// Answer one request. May suspend, e.g. while reading the body.
    async fn invoke(&self, req: FnRequest) -> Result<FnResponse, HandlerError>;
}
