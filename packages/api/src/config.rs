//! # Client configuration — backend location
//!
//! The only deployment option the client recognises is the root URL of the
//! banking backend. [`ClientConfig::load`] resolves it in priority order:
//!
//! 1. The `BACKEND_API` environment variable at run time (native targets; a
//!    `.env` file is honoured via `dotenvy`).
//! 2. A TOML config file, on native targets (the UI passes
//!    `<config dir>/argentbank/config.toml`):
//!
//!    ```toml
//!    [backend]
//!    url = "https://bank.example.com/api/v1/"
//!    ```
//!
//! 3. The `BACKEND_API` environment variable at **build** time, baked in with
//!    `option_env!`, which is the only option for a wasm bundle.
//! 4. [`DEFAULT_BACKEND_URL`].
//!
//! [`ClientConfig::from_env`] is the same chain without the file.
//!
//! Endpoint paths are joined beneath the root, so the root is normalised to
//! end with `/` (`.../api/v1` and `.../api/v1/` behave the same).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Backend root used when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001/api/v1/";

/// Environment variable holding the backend root URL.
pub const BACKEND_ENV_VAR: &str = "BACKEND_API";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("cannot read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backend section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BackendConfig {
    /// Root URL the `user/...` endpoints hang off.
    #[serde(default = "default_backend_url")]
    pub url: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            backend: BackendConfig { url: url.into() },
        }
    }

    /// Resolve the config from the environment (see module docs for priority).
    pub fn from_env() -> Self {
        runtime_env_url()
            .map(Self::new)
            .unwrap_or_else(Self::from_build_env)
    }

    /// Resolve the config from the environment and, below the run-time
    /// variable, the TOML file at `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if let Some(url) = runtime_env_url() {
            return Ok(Self::new(url));
        }
        match Self::from_file(path)? {
            Some(config) => {
                tracing::debug!(path = %path.display(), "backend configured from file");
                Ok(config)
            }
            None => Ok(Self::from_build_env()),
        }
    }

    /// Read a TOML config file. `Ok(None)` when it does not exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    fn from_build_env() -> Self {
        match option_env!("BACKEND_API") {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    /// The backend root, parsed and normalised to end with `/`.
    pub fn backend_url(&self) -> Result<Url, ConfigError> {
        let raw = self.backend.url.trim();
        let normalised = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };
        Url::parse(&normalised).map_err(|source| ConfigError::InvalidUrl {
            url: raw.to_string(),
            source,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_env_url() -> Option<String> {
    dotenvy::dotenv().ok();
    std::env::var(BACKEND_ENV_VAR).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_env_url() -> Option<String> {
    None
}
