//! Driven port over the persistent key-value store.
//!
//! Models the per-origin string store the console persists into: string keys
//! to string values, no expiry, no transactions. Two logical regions are in
//! use — the serialized user collection under one key and the session token
//! under another.

use thiserror::Error;

/// Errors raised by key-value store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store could not be reached or initialised.
    #[error("storage backend unavailable: {message}")]
    Backend {
        /// Description of the backend failure.
        message: String,
    },
    /// A key is not usable by this adapter.
    #[error("storage key '{key}' is not a valid entry name")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },
    /// A read failed.
    #[error("failed to read key '{key}': {message}")]
    Read {
        /// The key being read.
        key: String,
        /// Description of the read failure.
        message: String,
    },
    /// A write or removal failed.
    #[error("failed to write key '{key}': {message}")]
    Write {
        /// The key being written.
        key: String,
        /// Description of the write failure.
        message: String,
    },
}

/// Get/set/remove interface over string keys to string values.
///
/// Each call is synchronous and atomic from the caller's perspective; the
/// façade layers full read-modify-write cycles on top. Implementations must
/// make `remove` idempotent: removing an absent key succeeds.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Succeeds when absent.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
