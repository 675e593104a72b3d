//! Test fixtures for creating test data through the API.

#![allow(dead_code)]

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::TestHarness;

pub const MEMBER_PASSWORD: &str = "secret123";

/// Registration body for a member.
pub fn registration(email: &str, phone: &str) -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "phone": phone,
        "occupation": "Engineer",
        "isStudent": false,
        "email": email,
        "password": MEMBER_PASSWORD,
    })
}

/// Register a member and return the created user JSON.
pub async fn register_member(harness: &TestHarness, email: &str, phone: &str) -> Value {
    let (status, body) = harness
        .post("/api/register", None, registration(email, phone))
        .await;
    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body
}

/// Register a member, log in, and return `(user id, token)`.
pub async fn member_session(harness: &TestHarness, email: &str, phone: &str) -> (String, String) {
    let user = register_member(harness, email, phone).await;
    let token = harness.login(email, MEMBER_PASSWORD).await;
    (id_of(&user), token)
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("id field").to_string()
}
