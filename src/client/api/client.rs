use dioxus_logger::tracing;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    client::{
        config::ClientConfig,
        error::{ClientError, ConfigError},
    },
    model::api::ErrorDto,
};

/// HTTP implementation of the API collaborators.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(super) http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&config.api_url).map_err(|e| ConfigError::InvalidEnvValue {
            var: "api_url".to_string(),
            reason: e.to_string(),
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvValue {
                var: "api_url".to_string(),
                reason: format!("{} cannot be used as a base URL", config.api_url),
            });
        }

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Build an endpoint URL by appending path segments to the base URL.
    ///
    /// Segments are percent-encoded, so IDs returned by the API can be passed as-is.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// Send a request, mapping transport failures into the client taxonomy.
pub(super) async fn send(request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
    Ok(request.send().await?)
}

/// Parse a JSON body on success or map the status onto a [`ClientError`].
pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = error_message(response).await;

    Err(error_for_status(status, message))
}

/// Extract the error message from an error response body.
///
/// Prefers the `{"error": ...}` body the API returns, falling back to the raw text.
async fn error_message(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();

    match serde_json::from_str::<ErrorDto>(&text) {
        Ok(error_dto) => error_dto.error,
        Err(_) if text.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => text,
    }
}

pub(super) fn error_for_status(status: StatusCode, message: String) -> ClientError {
    match status {
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden,
        StatusCode::NOT_FOUND => ClientError::NotFound,
        StatusCode::CONFLICT => ClientError::AlreadyExists(message),
        s if s.is_server_error() => ClientError::ServiceUnavailable(s.as_u16()),
        s => {
            tracing::error!(status = %s, "Unexpected API response: {}", message);

            ClientError::UnexpectedResponse {
                status: s.as_u16(),
                message,
            }
        }
    }
}
