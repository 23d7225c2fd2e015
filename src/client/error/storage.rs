use thiserror::Error;

/// Failure reading or writing the persisted session token.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The storage backend cannot be accessed at all (no browser window, poisoned lock).
    #[error("Token storage is unavailable: {0}")]
    Unavailable(String),
    #[error("Failed to read persisted token: {0}")]
    Read(String),
    #[error("Failed to write persisted token: {0}")]
    Write(String),
}
