pub mod action;
pub mod models;
pub mod persistence;
pub mod session;
pub mod storage;

mod file_store;
mod memory;
pub use file_store::FileStorage;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStorage;

pub use action::{fold, reduce, Action};
pub use models::{SessionState, StorageKind, UserData};
pub use persistence::{PersistError, Persistence, STATE_KEY};
pub use session::{SessionStore, SubscriptionId};
pub use storage::{KeyValueStorage, StorageError};
