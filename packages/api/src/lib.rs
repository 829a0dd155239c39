//! # API crate — backend client and session flows
//!
//! Everything between a submitted form and the session store lives here.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend root URL from the environment, build-time env or TOML |
//! | [`models`] | The `{status, message, body}` envelope and request payloads |
//! | [`client`] | [`BankApi`] trait and its `reqwest` implementation [`HttpClient`] |
//! | [`auth`] | Form validation and the sign-in / profile-edit / sign-out flows |
//!
//! The session state itself, the reducer and the storage backends come from
//! the `store` crate and are re-exported for convenience.

pub mod auth;
pub mod client;
pub mod config;
pub mod models;

pub use auth::{FlowError, ProfileForm, SessionFlows, SignInForm};
pub use client::{ApiError, BankApi, HttpClient};
pub use config::{ClientConfig, ConfigError};
pub use models::{ApiResponse, Credentials, LoginBody, ProfileUpdate};

pub use store::{SessionState, SessionStore, StorageKind, UserData};
pub use tokio_util::sync::CancellationToken;
