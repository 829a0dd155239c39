//! Shared persistence constructor for all platforms.
//!
//! Returns a [`store::Persistence`] backed by the appropriate storage pair:
//! - **Web** (WASM + `web` feature): `sessionStorage` / `localStorage` via [`store::WebStorage`]
//! - **Desktop** (native): in-process memory for the session, files under the
//!   platform data directory for "remember me" via [`store::FileStorage`]
//! - **WASM without `web`**: in-process memory for both

use store::Persistence;

/// Create the platform-appropriate persistence adapter.
pub fn make_persistence() -> Persistence {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Persistence::new(store::WebStorage::session(), store::WebStorage::local())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("argentbank");
        Persistence::new(store::MemoryStorage::new(), store::FileStorage::new(base))
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Persistence::new(store::MemoryStorage::new(), store::MemoryStorage::new())
    }
}
