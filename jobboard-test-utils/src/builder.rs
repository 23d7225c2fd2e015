//! Declarative setup of the mock API.
//!
//! Endpoints are queued on the builder and registered on a fresh mock server by `build()`.

use mockito::{Mock, ServerGuard};

use crate::{error::TestError, TestContext};

/// Builder for a [`TestContext`].
pub struct TestBuilder {
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,

    // (role, expected_requests)
    login_endpoints: Vec<(String, usize)>,
    validate_endpoints: Vec<(String, usize)>,
    // (method, endpoint, status, message, expected_requests)
    error_endpoints: Vec<(String, String, usize, String, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            login_endpoints: Vec::new(),
            validate_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
        }
    }

    /// Register a login endpoint issuing a session for `role`.
    pub fn with_login_endpoint(mut self, role: impl Into<String>, expected_requests: usize) -> Self {
        self.login_endpoints.push((role.into(), expected_requests));
        self
    }

    /// Register a token validation endpoint resolving the test token to `role`.
    pub fn with_validate_endpoint(
        mut self,
        role: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.validate_endpoints
            .push((role.into(), expected_requests));
        self
    }

    /// Register an endpoint that fails with `status` and an error message.
    pub fn with_error_endpoint(
        mut self,
        method: impl Into<String>,
        endpoint: impl Into<String>,
        status: usize,
        message: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.error_endpoints.push((
            method.into(),
            endpoint.into(),
            status,
            message.into(),
            expected_requests,
        ));
        self
    }

    /// Register a custom mock endpoint.
    ///
    /// Paths are absolute on the mock server; build them with
    /// [`TestContext::path`] so they carry the `/api` prefix.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("GET", TestContext::path("/jobs").as_str())
    ///             .with_status(200)
    ///             .with_body("[]")
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and register all queued endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Server running with every endpoint registered
    /// - `Err(TestError::Json)` - A fixture body failed to serialize
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await;
        let mut mocks = Vec::new();

        // Custom endpoints first so sequential matching on a shared path behaves predictably
        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (role, expected) in self.login_endpoints {
            mocks.push(context.auth().create_login_endpoint(&role, expected).await?);
        }

        for (role, expected) in self.validate_endpoints {
            mocks.push(
                context
                    .auth()
                    .create_validate_endpoint(&role, expected)
                    .await?,
            );
        }

        for (method, endpoint, status, message, expected) in self.error_endpoints {
            mocks.push(
                context
                    .auth()
                    .create_error_endpoint(&method, &endpoint, status, &message, expected)
                    .await?,
            );
        }

        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    /// Expect an empty builder to start a server with no endpoints
    async fn builds_empty_context() {
        let test = TestBuilder::new().build().await.unwrap();

        assert!(test.api_url().ends_with("/api"));
        assert!(test.mocks.is_empty());
    }

    #[tokio::test]
    /// Expect queued endpoints to be registered in order
    async fn registers_queued_endpoints() {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| server.mock("GET", "/api/jobs").expect(0).create())
            .with_login_endpoint("applicant", 0)
            .with_validate_endpoint("admin", 0)
            .build()
            .await
            .unwrap();

        assert_eq!(test.mocks.len(), 3);
        test.assert_mocks();
    }
}
