//! # Session data model
//!
//! Defines the single entity the client keeps about the signed-in user. The
//! value is plain data (`Clone + Serialize + Deserialize`) because it is copied
//! into browser storage as JSON and read back on the next page load.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`SessionState`] | The whole session: `logged`, `userData`, `token` and the `storage` preference. |
//! | [`UserData`] | The profile returned by the backend. `firstName`/`lastName` are typed, every other field is kept verbatim in [`UserData::extra`]. |
//! | [`StorageKind`] | Which storage lifetime the session is persisted to: session-scoped or durable. |
//!
//! ## Wire shape
//!
//! ```json
//! {"logged":true,"userData":{"firstName":"Jane","lastName":"Doe"},"token":"T1","storage":"durable"}
//! ```
//!
//! Absent fields are omitted, so the empty state serialises as `{}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client-side session state.
///
/// `user_data` and `token` are both present or both absent; the reducer is
/// the only producer of new values and keeps that invariant. `Debug` shows
/// whether a token is held, never its value.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "is_false")]
    pub logged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// The "remember me" choice made at login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageKind>,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("logged", &self.logged)
            .field("user_data", &self.user_data)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("storage", &self.storage)
            .finish()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl SessionState {
    /// The signed-out state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A freshly signed-in state, before any storage preference is recorded.
    pub fn signed_in(user_data: UserData, token: String) -> Self {
        Self {
            logged: true,
            user_data: Some(user_data),
            token: Some(token),
            storage: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `user_data` and `token` are both present or both absent.
    pub fn is_consistent(&self) -> bool {
        self.user_data.is_some() == self.token.is_some()
    }

    /// "First Last" for the welcome header, if signed in.
    pub fn display_name(&self) -> Option<String> {
        self.user_data.as_ref().map(UserData::full_name)
    }
}

/// Profile record returned by `POST /user/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Fields the client does not interpret (`email`, `id`, `createdAt`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserData {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            extra: Map::new(),
        }
    }

    /// Builder method to attach an uninterpreted profile field.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Storage lifetime selected by the "remember me" checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Cleared when the browsing session ends.
    #[serde(alias = "sessionStorage")]
    Session,
    /// Kept until explicitly cleared.
    #[serde(alias = "localStorage")]
    Durable,
}

impl StorageKind {
    /// Map the "remember me" checkbox to a storage lifetime.
    pub fn from_remember_me(remember: bool) -> Self {
        if remember {
            StorageKind::Durable
        } else {
            StorageKind::Session
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Session => "session",
            StorageKind::Durable => "durable",
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_state_serializes_to_empty_object() {
        let json = serde_json::to_string(&SessionState::empty()).unwrap();
        assert_eq!(json, "{}");

        let parsed: SessionState = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
        assert!(!parsed.logged);
    }

    #[test]
    fn test_signed_in_state_wire_shape() {
        let mut state = SessionState::signed_in(UserData::new("Jane", "Doe"), "T1".to_string());
        state.storage = Some(StorageKind::Durable);

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "logged": true,
                "userData": { "firstName": "Jane", "lastName": "Doe" },
                "token": "T1",
                "storage": "durable"
            })
        );
    }

    #[test]
    fn test_user_data_keeps_unknown_fields() {
        let raw = json!({
            "email": "jane@example.com",
            "firstName": "Jane",
            "lastName": "Doe",
            "id": "64f0c2",
            "createdAt": "2023-07-01T10:00:00.000Z"
        });
        let user: UserData = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.extra.get("email"), Some(&json!("jane@example.com")));

        // Nothing is lost on the way back out
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn test_storage_kind_accepts_legacy_names() {
        let state: SessionState =
            serde_json::from_str(r#"{"logged":true,"storage":"localStorage"}"#).unwrap();
        assert_eq!(state.storage, Some(StorageKind::Durable));

        let state: SessionState = serde_json::from_str(r#"{"storage":"sessionStorage"}"#).unwrap();
        assert_eq!(state.storage, Some(StorageKind::Session));
    }

    #[test]
    fn test_remember_me_mapping() {
        assert_eq!(StorageKind::from_remember_me(true), StorageKind::Durable);
        assert_eq!(StorageKind::from_remember_me(false), StorageKind::Session);
    }

    #[test]
    fn test_consistency_check() {
        assert!(SessionState::empty().is_consistent());
        let half = SessionState {
            token: Some("T1".to_string()),
            ..SessionState::default()
        };
        assert!(!half.is_consistent());
    }

    #[test]
    fn test_debug_hides_token() {
        let state = SessionState::signed_in(UserData::new("Jane", "Doe"), "secret-token".to_string());
        let debug = format!("{state:?}");
        assert!(debug.contains("Jane"));
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token"));

        let store = crate::SessionStore::new(state);
        assert!(!format!("{store:?}").contains("secret-token"));
    }
}
