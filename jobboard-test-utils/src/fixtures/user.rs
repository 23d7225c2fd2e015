//! Identity payloads as the API serializes them (camelCase).

use serde_json::{json, Value};

use crate::constant::{TEST_EMAIL, TEST_TOKEN, TEST_USER_ID};

/// Identity JSON for the test user with the given role (`applicant`, `admin`, `super_admin`).
pub fn identity(role: &str) -> Value {
    json!({
        "id": TEST_USER_ID,
        "fullName": "Test User",
        "email": TEST_EMAIL,
        "role": role,
        "skills": ["rust", "sql"],
        "developerLevel": "Junior Developer"
    })
}

/// Successful login body carrying the identity and [`TEST_TOKEN`].
pub fn login_response(role: &str) -> Value {
    json!({
        "user": identity(role),
        "token": TEST_TOKEN
    })
}

/// `{ "user": ... }` envelope used by validate, register and profile updates.
pub fn user_envelope(user: Value) -> Value {
    json!({ "user": user })
}

/// Error body in the API's `{ "message": ... }` shape.
pub fn error_body(message: &str) -> Value {
    json!({ "message": message })
}
