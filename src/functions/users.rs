//! Static user list function. GET only; other methods get a 405 with an
//! `Allow` header (the router still merges CORS into it).

use async_trait::async_trait;
use hyper::header::{HeaderValue, ALLOW};
use hyper::{Method, StatusCode};
use serde::Serialize;

use crate::http::{self, Envelope};
use crate::router::error::HandlerError;
use crate::router::{FnRequest, FnResponse, Handler};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: &'static str,
    email: &'static str,
}

const USERS: [User; 3] = [
    User {
        id: 1,
        name: "Alice Johnson",
        email: "alice@example.com",
    },
    User {
        id: 2,
        name: "Bob Smith",
        email: "bob@example.com",
    },
    User {
        id: 3,
        name: "Carol Williams",
        email: "carol@example.com",
    },
];

pub struct Users;

#[async_trait]
impl Handler for Users {
    fn name(&self) -> &'static str {
        "users"
    }

    fn description(&self) -> &'static str {
        "Lists the sample users (GET only)"
    }

    async fn invoke(&self, req: FnRequest) -> Result<FnResponse, HandlerError> {
        if req.method() != Method::GET {
            let envelope = Envelope::error(format!("Method {} not allowed", req.method()));
            let mut response =
                http::build_envelope_response(StatusCode::METHOD_NOT_ALLOWED, &envelope);
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET"));
            return Ok(response);
        }

        let data = serde_json::to_value(USERS.as_slice())?;
        let envelope = Envelope::ok(format!("{} user(s)", USERS.len()), data);
        Ok(http::build_envelope_response(StatusCode::OK, &envelope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{request, response_json};

    #[tokio::test]
    async fn get_lists_all_users() {
        let response = Users.invoke(request(Method::GET, "/users")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = response_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"][0]["name"], "Alice Johnson");
    }

    #[tokio::test]
    async fn other_methods_get_405_with_allow_header() {
        let response = Users.invoke(request(Method::POST, "/users")).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "GET");

        let json = response_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Method POST not allowed");
    }
}
