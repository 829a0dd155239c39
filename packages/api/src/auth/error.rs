use thiserror::Error;

use crate::client::ApiError;

/// Why a session flow did not complete.
///
/// The `Display` text is what the UI shows under the form.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A required form field was left empty.
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("You are not signed in")]
    NotSignedIn,
    /// The backend refused the request; carries its message.
    #[error("{0}")]
    Rejected(String),
    /// Network or decoding failure.
    #[error("Error with server")]
    Server(#[source] ApiError),
    /// The owning view went away before the flow finished.
    #[error("operation cancelled")]
    Cancelled,
}

impl From<ApiError> for FlowError {
    fn from(e: ApiError) -> Self {
        FlowError::Server(e)
    }
}

impl FlowError {
    /// Cancelled flows are silent: there is no view left to show a message in.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FlowError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(FlowError::MissingField("Username").to_string(), "Username is required");
        assert_eq!(
            FlowError::Rejected("Invalid credentials".to_string()).to_string(),
            "Invalid credentials"
        );
        let server = FlowError::from(ApiError::MissingBody("login"));
        assert_eq!(server.to_string(), "Error with server");
        assert!(!server.is_cancelled());
        assert!(FlowError::Cancelled.is_cancelled());
    }
}
