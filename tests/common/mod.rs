//! Common test utilities and helpers
//!
//! - `auth_helpers` - signing users up and in through the HTTP API
//! - `assertions` - status assertions with response bodies in the failure output
//! - `database` - PostgreSQL fixtures, active only when a test database is configured

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use dentrack::backend::auth::password::{CredentialHasher, MIN_HASH_COST};
use dentrack::backend::server::build_app;
use dentrack::backend::store::MemoryStore;
use serde_json::Value;
use tower::ServiceExt;

pub use auth_helpers::*;
pub use database::*;

/// App over a fresh in-memory store with the cheapest bcrypt cost
pub fn test_app() -> Router {
    build_app(
        Arc::new(MemoryStore::new()),
        CredentialHasher::new(MIN_HASH_COST),
    )
}

/// A response reduced to status and body
///
/// The body is parsed JSON, `Null` when empty, or a JSON string holding the
/// raw text when it is not JSON.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Send one request through the router
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    match body {
        Some(json) => {
            send_raw(app, method, uri, token, Some("application/json"), json.to_string()).await
        }
        None => send_raw(app, method, uri, token, None, String::new()).await,
    }
}

/// Send a request with an arbitrary body and optional content type
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    content_type: Option<&str>,
    body: String,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse { status, body }
}
