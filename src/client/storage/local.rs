use web_sys::Storage;

use crate::client::{error::StorageError, storage::TokenStorage};

/// Token storage backed by the browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no browser window".to_string()))?;

        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let token = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))?;

        Ok(token.filter(|token| !token.is_empty()))
    }

    fn store(&self, token: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
