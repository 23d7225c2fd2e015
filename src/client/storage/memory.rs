use std::sync::{Arc, Mutex};

use crate::client::{error::StorageError, storage::TokenStorage};

/// In-memory token storage.
///
/// Clones share the same slot, so handing a clone to a second session store simulates a
/// reload of the application against the same persisted state.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStorage {
    /// Storage pre-seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(token.into()))),
        }
    }

    fn with_slot<T>(&self, f: impl FnOnce(&mut Option<String>) -> T) -> Result<T, StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        Ok(f(&mut slot))
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.with_slot(|slot| slot.clone())
    }

    fn store(&self, token: &str) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = Some(token.to_string()))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Expect clones to observe each other's writes
    fn clones_share_state() {
        let storage = MemoryTokenStorage::default();
        let reloaded = storage.clone();

        storage.store("abc").unwrap();
        assert_eq!(reloaded.load().unwrap(), Some("abc".to_string()));

        reloaded.clear().unwrap();
        assert_eq!(storage.load().unwrap(), None);
    }
}
