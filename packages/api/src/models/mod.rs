//! Request and response shapes for the `user/...` endpoints.

pub mod envelope;

pub use envelope::{ApiResponse, Credentials, LoginBody, ProfileUpdate};
