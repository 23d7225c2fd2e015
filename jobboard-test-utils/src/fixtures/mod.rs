//! Fixtures for the mock job board API.
//!
//! - `user` - identity JSON and login/session payloads
//! - `job` - job posting and application JSON
//! - `auth` - mock authentication endpoints registered on a [`TestContext`](crate::TestContext)

pub mod auth;
pub mod job;
pub mod user;
