//! API collaborators.
//!
//! [`AuthApi`] and [`JobApi`] describe the job board REST API as stateless request/response
//! mappers; [`ApiClient`] implements both over HTTP. Authenticated calls take the bearer token
//! explicitly so the client itself never holds session state.

pub mod auth;
pub mod client;
pub mod job;

pub use client::ApiClient;

use crate::{
    client::error::ClientError,
    model::{
        application::{
            ApplicationDto, ApplicationReceiptDto, ApplicationStatus, NewApplication,
        },
        job::{JobDto, JobFilter, NewJobDto},
        user::{LoginRequest, LoginResponse, ProfilePatch, RegisterRequest, UserDto},
    },
};

/// Authentication and account endpoints.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// Exchange credentials for an identity and token.
    ///
    /// # Returns
    /// - `Ok(LoginResponse)` - Identity and non-empty bearer token
    /// - `Err(ClientError::InvalidCredentials)` - Email or password rejected (401)
    /// - `Err(ClientError::Network)` - API unreachable
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError>;

    /// Create an account. Does not authenticate.
    async fn register(&self, fields: &RegisterRequest) -> Result<UserDto, ClientError>;

    /// Resolve a persisted token into the identity it belongs to.
    ///
    /// Returns `Err(ClientError::Unauthorized)` when the token is invalid or expired.
    async fn validate_token(&self, token: &str) -> Result<UserDto, ClientError>;

    /// Apply a profile patch to the user with the given ID, returning the updated identity.
    async fn update_profile(
        &self,
        token: &str,
        user_id: &str,
        patch: &ProfilePatch,
    ) -> Result<UserDto, ClientError>;
}

/// Job postings and applications.
#[allow(async_fn_in_trait)]
pub trait JobApi {
    async fn get_jobs(&self, filter: &JobFilter) -> Result<Vec<JobDto>, ClientError>;

    async fn get_job_by_id(&self, id: &str) -> Result<JobDto, ClientError>;

    async fn create_job(&self, token: &str, job: &NewJobDto) -> Result<JobDto, ClientError>;

    async fn apply_for_job(
        &self,
        token: &str,
        job_id: &str,
        application: NewApplication,
    ) -> Result<ApplicationReceiptDto, ClientError>;

    /// Applications submitted by a user, empty when the user has none.
    async fn get_user_applications(
        &self,
        token: &str,
        user_id: &str,
    ) -> Result<Vec<ApplicationDto>, ClientError>;

    async fn get_all_applications(&self, token: &str) -> Result<Vec<ApplicationDto>, ClientError>;

    async fn update_application_status(
        &self,
        token: &str,
        application_id: &str,
        status: ApplicationStatus,
    ) -> Result<ApplicationDto, ClientError>;
}
