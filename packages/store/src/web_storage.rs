//! # Web Storage backend — browser-side persistence
//!
//! [`WebStorage`] is the [`KeyValueStorage`] used on the **web platform**. It
//! wraps the browser's `window.sessionStorage` (cleared when the tab's
//! browsing session ends) or `window.localStorage` (kept until cleared) via
//! `web-sys`.
//!
//! ## Handle management
//!
//! `WebStorage` only remembers *which* area it targets and looks the
//! `web_sys::Storage` object up on every call. `web_sys::Storage` is not
//! `Send`, and the lookup is a cheap property read on `window`, so the handle
//! stays `Clone + Send + Sync` like the other backends.
//!
//! ## Errors
//!
//! A missing `window` or a storage area disabled by privacy settings surfaces
//! as [`StorageError::Unavailable`]; a throwing `setItem` (quota exceeded)
//! surfaces as [`StorageError::Rejected`].

use web_sys::Storage;

use crate::models::StorageKind;
use crate::storage::{KeyValueStorage, StorageError};

/// `sessionStorage` / `localStorage` backend.
#[derive(Clone, Copy, Debug)]
pub struct WebStorage {
    kind: StorageKind,
}

impl WebStorage {
    /// `window.sessionStorage`
    pub fn session() -> Self {
        Self {
            kind: StorageKind::Session,
        }
    }

    /// `window.localStorage`
    pub fn local() -> Self {
        Self {
            kind: StorageKind::Durable,
        }
    }

    fn area(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let area = match self.kind {
            StorageKind::Session => window.session_storage(),
            StorageKind::Durable => window.local_storage(),
        };
        area.map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable(format!("{} storage disabled", self.kind)))
    }
}

impl KeyValueStorage for WebStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.area()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.area()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.area()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
}
