//! Test context returned by [`TestBuilder`](crate::TestBuilder).

use mockito::{Mock, Server, ServerGuard};

use crate::constant::API_PREFIX;

/// Running mock API server plus the endpoints registered on it.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_login_endpoint("applicant", 1)
///     .build()
///     .await?;
///
/// let config = ClientConfig::default().with_api_url(test.api_url());
///
/// // ...exercise the client...
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    pub(crate) server: ServerGuard,
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock API, including the `/api` prefix.
    pub fn api_url(&self) -> String {
        format!("{}{}", self.server.url(), API_PREFIX)
    }

    /// Full path of an endpoint on the mock API, e.g. `path("/auth/login")`.
    pub fn path(endpoint: &str) -> String {
        format!("{}{}", API_PREFIX, endpoint)
    }

    /// Direct access to the mock server for one-off endpoints.
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert every registered endpoint was hit the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
