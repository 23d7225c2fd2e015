use std::path::PathBuf;

use crate::client::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_TOKEN_FILE: &str = ".jobboard/token";

const API_URL_VAR: &str = "JOBBOARD_API_URL";
const TOKEN_KEY_VAR: &str = "JOBBOARD_TOKEN_KEY";
const TOKEN_FILE_VAR: &str = "JOBBOARD_TOKEN_FILE";

/// Client configuration: where the API lives and where the session token is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every API path is appended to
    pub api_url: String,
    /// Browser `localStorage` key holding the token
    pub token_storage_key: String,
    /// File holding the token on desktop builds
    pub token_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_string(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
        }
    }
}

impl ClientConfig {
    /// Build the configuration from the environment, falling back to defaults for unset
    /// variables.
    ///
    /// Browsers have no process environment, so wasm builds read the variables at compile
    /// time instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            #[cfg(target_arch = "wasm32")]
            {
                match var {
                    API_URL_VAR => option_env!("JOBBOARD_API_URL").map(str::to_string),
                    TOKEN_KEY_VAR => option_env!("JOBBOARD_TOKEN_KEY").map(str::to_string),
                    TOKEN_FILE_VAR => option_env!("JOBBOARD_TOKEN_FILE").map(str::to_string),
                    _ => None,
                }
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                std::env::var(var).ok()
            }
        })
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(api_url) = non_empty(API_URL_VAR, lookup(API_URL_VAR))? {
            reqwest::Url::parse(&api_url).map_err(|e| ConfigError::InvalidEnvValue {
                var: API_URL_VAR.to_string(),
                reason: e.to_string(),
            })?;
            config.api_url = api_url.trim_end_matches('/').to_string();
        }

        if let Some(key) = non_empty(TOKEN_KEY_VAR, lookup(TOKEN_KEY_VAR))? {
            config.token_storage_key = key;
        }

        if let Some(path) = non_empty(TOKEN_FILE_VAR, lookup(TOKEN_FILE_VAR))? {
            config.token_file = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Point the client at a different API, e.g. a mock server in tests.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Set-but-blank variables are rejected rather than silently ignored
fn non_empty(var: &str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    match value {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value is empty".to_string(),
        }),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}
