//! Authentication test helpers
//!
//! Create users through the public endpoints so tests exercise the same
//! path a client would.

use axum::{
    http::{Method, StatusCode},
    Router,
};
use serde_json::json;

use super::send;

/// A signed-in test user
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub fn sign_up_body(email: &str, password: &str, confirmation: &str) -> serde_json::Value {
    json!({
        "credentials": {
            "email": email,
            "password": password,
            "password_confirmation": confirmation
        }
    })
}

pub fn sign_in_body(email: &str, password: &str) -> serde_json::Value {
    json!({ "credentials": { "email": email, "password": password } })
}

/// Sign up and sign in, returning the issued token
pub async fn create_test_user(app: &Router, email: &str, password: &str) -> TestUser {
    let response = send(
        app,
        Method::POST,
        "/sign-up",
        None,
        Some(sign_up_body(email, password, password)),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

    let response = send(
        app,
        Method::POST,
        "/sign-in",
        None,
        Some(sign_in_body(email, password)),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

    let user = &response.body["user"];
    TestUser {
        id: user["id"].as_str().expect("user id").to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: user["token"].as_str().expect("token").to_string(),
    }
}

pub fn treatment_body(name: &str) -> serde_json::Value {
    json!({
        "treatment": {
            "name": name,
            "tooth": "36",
            "radiographs": "pa-36.png",
            "date": "2024-01-15"
        }
    })
}
