//! In-memory key-value store adapter.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ports::key_value_store::{KeyValueStore, StorageError};

/// Process-local store backed by a mutex-guarded map.
///
/// Contents vanish when the store is dropped, matching a fresh browser tab
/// with empty per-origin storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries.lock().map_err(|_| StorageError::Backend {
            message: "store mutex poisoned".to_owned(),
        })
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}
