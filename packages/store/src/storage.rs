//! # Key/value storage backends
//!
//! The persistence adapter only needs the three calls the browser's Web
//! Storage API offers, so that is the whole [`KeyValueStorage`] trait.
//! Implementations live in sibling modules:
//!
//! | Backend | Module | Used for |
//! |---------|--------|----------|
//! | [`MemoryStorage`](crate::MemoryStorage) | `memory` | tests, session-scoped storage on native targets |
//! | [`FileStorage`](crate::FileStorage) | `file_store` | durable storage on native targets |
//! | `WebStorage` | `web_storage` | `sessionStorage` / `localStorage` in the browser |
//!
//! Every call returns a `Result`; deciding whether a failure matters is left
//! to the caller.

use std::sync::Arc;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Anything the platform reports on write (quota exceeded, security error, ...).
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
}

/// Synchronous string key/value storage.
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
