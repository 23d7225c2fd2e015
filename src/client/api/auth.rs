use dioxus_logger::tracing;

use crate::{
    client::{
        api::{
            client::{read_json, send},
            ApiClient, AuthApi,
        },
        error::ClientError,
    },
    model::user::{
        LoginRequest, LoginResponse, ProfilePatch, RegisterRequest, UserDto, UserEnvelope,
    },
};

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "login"]))
            .json(credentials);

        let response = match read_json::<LoginResponse>(send(request).await?).await {
            Err(ClientError::Unauthorized) => return Err(ClientError::InvalidCredentials),
            result => result?,
        };

        if response.token.is_empty() {
            tracing::error!(user_id = %response.user.id, "Login response did not include a token");

            return Err(ClientError::UnexpectedResponse {
                status: 200,
                message: "Login response did not include a token".to_string(),
            });
        }

        Ok(response)
    }

    async fn register(&self, fields: &RegisterRequest) -> Result<UserDto, ClientError> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "register"]))
            .json(fields);

        let envelope: UserEnvelope = read_json(send(request).await?).await?;

        Ok(envelope.user)
    }

    async fn validate_token(&self, token: &str) -> Result<UserDto, ClientError> {
        let request = self
            .http
            .get(self.endpoint(&["auth", "validate"]))
            .bearer_auth(token);

        let envelope: UserEnvelope = read_json(send(request).await?).await?;

        Ok(envelope.user)
    }

    async fn update_profile(
        &self,
        token: &str,
        user_id: &str,
        patch: &ProfilePatch,
    ) -> Result<UserDto, ClientError> {
        let request = self
            .http
            .put(self.endpoint(&["users", user_id]))
            .bearer_auth(token)
            .json(patch);

        let envelope: UserEnvelope = read_json(send(request).await?).await?;

        Ok(envelope.user)
    }
}
