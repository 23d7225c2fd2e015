//! Persistence of the session token across reloads.
//!
//! The session store is the only component that drives a [`TokenStorage`]; nothing else
//! writes the token. Backends:
//! - [`MemoryTokenStorage`] - process memory, shared between clones (tests, fallbacks)
//! - [`FileTokenStorage`] - a file on disk for desktop builds
//! - [`LocalTokenStorage`] - browser `localStorage` for web builds

pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub mod file;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod local;

pub use memory::MemoryTokenStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTokenStorage;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use local::LocalTokenStorage;

use crate::client::{config::ClientConfig, error::StorageError};

/// Storage for the single opaque session token.
pub trait TokenStorage {
    /// Read the persisted token, `None` when nothing is stored.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist the token, replacing any previous value.
    fn store(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the persisted token. Removing an absent token is not an error.
    fn clear(&self) -> Result<(), StorageError>;
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub type PlatformTokenStorage = LocalTokenStorage;

#[cfg(all(not(feature = "web"), target_arch = "wasm32"))]
pub type PlatformTokenStorage = MemoryTokenStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStorage = FileTokenStorage;

/// Token storage for the platform the client was built for.
pub fn platform_storage(config: &ClientConfig) -> PlatformTokenStorage {
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    {
        LocalTokenStorage::new(&config.token_storage_key)
    }

    #[cfg(all(not(feature = "web"), target_arch = "wasm32"))]
    {
        let _ = config;
        MemoryTokenStorage::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        FileTokenStorage::new(&config.token_file)
    }
}
