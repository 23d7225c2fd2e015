//! Placeholder values shared by fixtures and tests. None of these are real credentials.

/// Path prefix the mock API is served under, mirroring a deployed `/api` base URL.
pub static API_PREFIX: &str = "/api";

/// Bearer token issued by the mock login endpoint.
pub static TEST_TOKEN: &str = "test-session-token";

pub static TEST_USER_ID: &str = "user-1";

pub static TEST_EMAIL: &str = "applicant@example.com";

pub static TEST_PASSWORD: &str = "hunter22";
