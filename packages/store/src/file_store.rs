//! # Filesystem-backed key/value storage
//!
//! [`FileStorage`] is the durable [`KeyValueStorage`] on desktop targets: a
//! "remember me" session has to survive an app restart, which the in-memory
//! backend cannot offer.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json      # one file per key, holding the raw value
//! ```
//!
//! Use `dirs::data_dir()` on the caller side to obtain a platform-appropriate
//! base (e.g. `~/.local/share/argentbank/` on Linux).

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{KeyValueStorage, StorageError};

/// Filesystem-backed storage, one file per key.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn item_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.item_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.item_path(key), value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.item_path(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
