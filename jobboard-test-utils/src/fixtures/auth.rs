//! Mock authentication endpoints.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN},
    error::TestError,
    fixtures::user,
    TestContext,
};

impl TestContext {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { context: self }
    }
}

pub struct AuthFixtures<'a> {
    context: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// POST `/auth/login` accepting [`TEST_EMAIL`] / [`TEST_PASSWORD`] and returning an identity
    /// with `role` plus [`TEST_TOKEN`].
    ///
    /// # Returns
    /// - `Ok(Mock)` - Endpoint expecting `expected_requests` calls
    /// - `Err(TestError::Json)` - Response body failed to serialize
    pub async fn create_login_endpoint(
        &mut self,
        role: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&user::login_response(role))?;

        Ok(self
            .context
            .server
            .mock("POST", TestContext::path("/auth/login").as_str())
            .match_body(Matcher::PartialJson(json!({
                "email": TEST_EMAIL,
                "password": TEST_PASSWORD
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// GET `/auth/validate` answering only requests bearing [`TEST_TOKEN`].
    pub async fn create_validate_endpoint(
        &mut self,
        role: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&user::user_envelope(user::identity(role)))?;

        Ok(self
            .context
            .server
            .mock("GET", TestContext::path("/auth/validate").as_str())
            .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create_async()
            .await)
    }

    /// Any `method path` answered with `status` and a `{ "message": ... }` body.
    pub async fn create_error_endpoint(
        &mut self,
        method: &str,
        endpoint: &str,
        status: usize,
        message: &str,
        expected_requests: usize,
    ) -> Result<Mock, TestError> {
        let body = serde_json::to_string(&user::error_body(message))?;

        Ok(self
            .context
            .server
            .mock(method, TestContext::path(endpoint).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create_async()
            .await)
    }
}
