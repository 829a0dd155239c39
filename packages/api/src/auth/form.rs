//! Form input for the flows, validated before anything reaches the network or the store.

use store::StorageKind;

use super::error::FlowError;
use crate::models::{Credentials, ProfileUpdate};

/// The sign-in form: username (an email address), password, "remember me".
#[derive(Clone, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl std::fmt::Debug for SignInForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignInForm")
            .field("email", &self.email)
            .field("remember_me", &self.remember_me)
            .finish_non_exhaustive()
    }
}

impl SignInForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>, remember_me: bool) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me,
        }
    }

    /// Storage lifetime the session will be persisted with.
    pub fn storage(&self) -> StorageKind {
        StorageKind::from_remember_me(self.remember_me)
    }

    /// Check required fields. The email is trimmed; the password is sent as typed.
    pub fn validate(&self) -> Result<Credentials, FlowError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FlowError::MissingField("Username"));
        }
        if self.password.is_empty() {
            return Err(FlowError::MissingField("Password"));
        }
        Ok(Credentials::new(email, self.password.clone()))
    }
}

/// The inline "Edit Name" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
}

impl ProfileForm {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, FlowError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        if first_name.is_empty() {
            return Err(FlowError::MissingField("First name"));
        }
        if last_name.is_empty() {
            return Err(FlowError::MissingField("Last name"));
        }
        Ok(ProfileUpdate::new(first_name, last_name))
    }
}
