//! Error types for the job board client.
//!
//! `ClientError` is the taxonomy surfaced to views by the API collaborators and the
//! session store. Errors are plain data (`Clone + PartialEq`) so they can live inside form
//! state and be compared in tests. Configuration and token storage failures have their own
//! types: configuration errors stop the app before a session exists, and storage errors are
//! logged by the session store without failing the operation.

pub mod config;
pub mod storage;

use thiserror::Error;

pub use config::ConfigError;
pub use storage::StorageError;

/// Main error type for client operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The API could not be reached (connection refused, DNS failure, timeout).
    #[error("Unable to reach the job board API: {0}")]
    Network(String),
    /// Login was rejected with 401.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// The API rejected the submitted fields (400).
    #[error("{0}")]
    Validation(String),
    /// Registration conflicted with an existing account (409).
    #[error("An account already exists: {0}")]
    AlreadyExists(String),
    /// The bearer token is invalid or has expired (401 outside of login).
    #[error("Your session is invalid or has expired")]
    Unauthorized,
    /// The account's role does not permit the operation (403).
    #[error("You do not have permission to perform this action")]
    Forbidden,
    #[error("The requested resource was not found")]
    NotFound,
    /// The API answered with a 5xx status.
    #[error("The job board API is unavailable (status {0})")]
    ServiceUnavailable(u16),
    /// The operation needs an authenticated session and there is none.
    #[error("You need to be logged in to do that")]
    NotAuthenticated,
    /// A profile update resolved after the session it was issued for had ended.
    #[error("The session changed before the request completed")]
    SessionChanged,
    /// The response body could not be parsed.
    #[error("Failed to parse API response: {0}")]
    Decode(String),
    #[error("Unexpected response with status {status}: {message}")]
    UnexpectedResponse { status: u16, message: String },
}

/// How a view should react to a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Transient failure, the user may try again
    Retry,
    /// The user must correct their input, shown inline
    FixInput,
    /// The session is gone, log out and redirect to login
    Reauthenticate,
    /// Role mismatch or missing resource, navigate away without retrying
    Redirect,
    /// Permanent failure
    Fail,
}

impl ClientError {
    /// Classify the error into the action a view should take.
    pub fn recovery(&self) -> Recovery {
        match self {
            Self::Network(_) | Self::ServiceUnavailable(_) => Recovery::Retry,

            Self::InvalidCredentials | Self::Validation(_) | Self::AlreadyExists(_) => {
                Recovery::FixInput
            }

            Self::Unauthorized | Self::NotAuthenticated | Self::SessionChanged => {
                Recovery::Reauthenticate
            }

            Self::Forbidden | Self::NotFound => Recovery::Redirect,

            Self::Decode(_) | Self::UnexpectedResponse { .. } => Recovery::Fail,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }

        match err.status() {
            Some(status) => Self::UnexpectedResponse {
                status: status.as_u16(),
                message: err.to_string(),
            },
            // No status means the request never produced a response
            None => Self::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Expect transport and server failures to be retryable
    fn transient_errors_are_retryable() {
        assert_eq!(
            ClientError::Network("refused".to_string()).recovery(),
            Recovery::Retry
        );
        assert_eq!(ClientError::ServiceUnavailable(503).recovery(), Recovery::Retry);
    }

    #[test]
    /// Expect user input issues to be fixed inline rather than retried
    fn input_errors_require_fixing_input() {
        assert_eq!(ClientError::InvalidCredentials.recovery(), Recovery::FixInput);
        assert_eq!(
            ClientError::Validation("bad email".to_string()).recovery(),
            Recovery::FixInput
        );
        assert_eq!(
            ClientError::AlreadyExists("email".to_string()).recovery(),
            Recovery::FixInput
        );
    }

    #[test]
    /// Expect session errors to force reauthentication and role errors to redirect
    fn session_and_role_errors() {
        assert_eq!(ClientError::Unauthorized.recovery(), Recovery::Reauthenticate);
        assert_eq!(ClientError::SessionChanged.recovery(), Recovery::Reauthenticate);
        assert_eq!(ClientError::Forbidden.recovery(), Recovery::Redirect);
    }

    #[test]
    /// Expect unreadable responses to fail permanently
    fn malformed_responses_fail() {
        assert_eq!(
            ClientError::Decode("expected value".to_string()).recovery(),
            Recovery::Fail
        );
    }
}
