//! # Backend envelope and payloads
//!
//! Every backend reply is wrapped in the same JSON envelope:
//!
//! ```json
//! {"status": 200, "message": "User successfully logged in", "body": {"token": "..."}}
//! ```
//!
//! The `status` field inside the envelope is what decides success, not the
//! HTTP status line. `message` is meant for humans and is shown verbatim when
//! a request is refused.
//!
//! | Type | Used by |
//! |------|---------|
//! | [`ApiResponse`] | every endpoint |
//! | [`Credentials`] | `POST user/login` request body |
//! | [`LoginBody`] | `POST user/login` response body |
//! | [`ProfileUpdate`] | `PUT user/profile` request body |
//!
//! The profile itself is [`store::UserData`].

use serde::{Deserialize, Serialize};

/// The `{status, message, body}` wrapper around every reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    // No `default` here: it would require `T: Default`. Missing options are `None` anyway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    /// An envelope with only a status, for replies that carry no JSON.
    pub fn bare(status: u16) -> Self {
        Self {
            status,
            message: None,
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// The server's message, or a generic one naming the status.
    pub fn failure_message(&self) -> String {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => format!("Request failed with status {}", self.status),
        }
    }
}

/// Sign-in credentials.
#[derive(Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful sign-in.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginBody {
    pub token: String,
}

impl std::fmt::Debug for LoginBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginBody").finish_non_exhaustive()
    }
}

/// New names sent to `PUT user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileUpdate {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
