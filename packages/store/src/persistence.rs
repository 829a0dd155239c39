//! # Persistence adapter — mirroring the session into storage
//!
//! [`Persistence`] holds one session-scoped and one durable
//! [`KeyValueStorage`] and moves [`SessionState`] snapshots in and out of them
//! as JSON under the fixed key [`STATE_KEY`].
//!
//! ## Read path
//!
//! [`load`](Persistence::load) is total: it tries the session-scoped backend,
//! then the durable one, and falls back to the empty state. A value that does
//! not parse, or a backend that cannot be read, counts as "nothing stored"
//! (logged at `warn`) and the lookup moves on to the next backend.
//!
//! ## Write path
//!
//! [`save`](Persistence::save) and [`clear`](Persistence::clear) return a
//! [`PersistError`]. Callers treat persistence as fire-and-forget: they log the
//! error and carry on, because the in-memory [`SessionStore`](crate::SessionStore)
//! stays the source of truth.

use std::sync::Arc;

use thiserror::Error;

use crate::models::{SessionState, StorageKind};
use crate::storage::{KeyValueStorage, StorageError};

/// The key the serialized session lives under in both backends.
pub const STATE_KEY: &str = "state";

/// Errors raised while persisting the session.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to serialize session state: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("stored session state is malformed: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("{backend} storage: {source}")]
    Storage {
        backend: StorageKind,
        #[source]
        source: StorageError,
    },
}

/// Reads and writes the serialized session in one of two storage backends.
#[derive(Clone)]
pub struct Persistence {
    session: Arc<dyn KeyValueStorage>,
    durable: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}

impl Persistence {
    pub fn new(
        session: impl KeyValueStorage + 'static,
        durable: impl KeyValueStorage + 'static,
    ) -> Self {
        Self {
            session: Arc::new(session),
            durable: Arc::new(durable),
        }
    }

    fn backend(&self, kind: StorageKind) -> &dyn KeyValueStorage {
        match kind {
            StorageKind::Session => self.session.as_ref(),
            StorageKind::Durable => self.durable.as_ref(),
        }
    }

    /// Read the state stored in one backend, if any.
    pub fn read(&self, kind: StorageKind) -> Result<Option<SessionState>, PersistError> {
        let raw = self
            .backend(kind)
            .get_item(STATE_KEY)
            .map_err(|source| PersistError::Storage {
                backend: kind,
                source,
            })?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(PersistError::Deserialize)
    }

    /// Initial state for a new [`SessionStore`](crate::SessionStore).
    ///
    /// Session-scoped storage wins over durable storage; unreadable or
    /// malformed entries are skipped.
    pub fn load(&self) -> SessionState {
        for kind in [StorageKind::Session, StorageKind::Durable] {
            match self.read(kind) {
                Ok(Some(state)) => {
                    tracing::debug!(backend = %kind, logged = state.logged, "restored session");
                    return state;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("ignoring stored session: {e}"),
            }
        }
        SessionState::empty()
    }

    /// Serialize `state` into the `kind` backend.
    pub fn save(&self, state: &SessionState, kind: StorageKind) -> Result<(), PersistError> {
        let raw = serde_json::to_string(state).map_err(PersistError::Serialize)?;
        self.backend(kind)
            .set_item(STATE_KEY, &raw)
            .map_err(|source| PersistError::Storage {
                backend: kind,
                source,
            })
    }

    /// Remove the stored session from both backends.
    ///
    /// Both removals are attempted; the first failure is returned.
    pub fn clear(&self) -> Result<(), PersistError> {
        let mut first_error = None;
        for kind in [StorageKind::Session, StorageKind::Durable] {
            if let Err(source) = self.backend(kind).remove_item(STATE_KEY) {
                first_error.get_or_insert(PersistError::Storage {
                    backend: kind,
                    source,
                });
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
