//! # Transition requests and the reducer
//!
//! Every change to [`SessionState`] is described by an [`Action`] and applied by
//! [`reduce`], a pure function from `(state, action)` to a new state. The action
//! set is closed: the `match` in [`reduce`] is exhaustive, so there is no
//! "unknown action" fallthrough to get wrong. Actions arriving as JSON (replay,
//! logs) are decoded with [`Action::from_json`], which rejects unknown kinds
//! before they can reach a store.
//!
//! | Action | Result |
//! |--------|--------|
//! | `LOGIN_VALID { userData, token }` | `{ logged: true, userData, token }` (storage preference dropped) |
//! | `LOGOUT` | `{}` |
//! | `SAVE_STORAGE { storage }` | previous state with `storage` overwritten |
//! | `PROFILE_UPDATE { firstName, lastName }` | previous state with the two names overwritten; no-op when signed out |

use serde::{Deserialize, Serialize};

use crate::models::{SessionState, StorageKind, UserData};

/// A named, immutable description of a requested session change.
///
/// `Debug` leaves the token out.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    LoginValid { user_data: UserData, token: String },
    Logout,
    SaveStorage { storage: StorageKind },
    ProfileUpdate { first_name: String, last_name: String },
}

impl Action {
    /// Decode an action from its `{"type": "...", ...}` JSON form.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The wire name of this action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::LoginValid { .. } => "LOGIN_VALID",
            Action::Logout => "LOGOUT",
            Action::SaveStorage { .. } => "SAVE_STORAGE",
            Action::ProfileUpdate { .. } => "PROFILE_UPDATE",
        }
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::LoginValid { user_data, .. } => f
                .debug_struct("LoginValid")
                .field("user_data", user_data)
                .field("token", &"<redacted>")
                .finish(),
            Action::Logout => f.write_str("Logout"),
            Action::SaveStorage { storage } => {
                f.debug_struct("SaveStorage").field("storage", storage).finish()
            }
            Action::ProfileUpdate {
                first_name,
                last_name,
            } => f
                .debug_struct("ProfileUpdate")
                .field("first_name", first_name)
                .field("last_name", last_name)
                .finish(),
        }
    }
}

/// Apply one action to `state`, returning the next state.
pub fn reduce(state: &SessionState, action: &Action) -> SessionState {
    match action {
        Action::LoginValid { user_data, token } => {
            SessionState::signed_in(user_data.clone(), token.clone())
        }
        Action::Logout => SessionState::empty(),
        Action::SaveStorage { storage } => SessionState {
            storage: Some(*storage),
            ..state.clone()
        },
        Action::ProfileUpdate {
            first_name,
            last_name,
        } => {
            // A profile without a token would break the pairing invariant.
            let Some(current) = state.user_data.as_ref() else {
                return state.clone();
            };
            SessionState {
                user_data: Some(UserData {
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                    ..current.clone()
                }),
                ..state.clone()
            }
        }
    }
}

/// Apply a sequence of actions starting from `initial`.
pub fn fold<'a>(
    initial: SessionState,
    actions: impl IntoIterator<Item = &'a Action>,
) -> SessionState {
    actions
        .into_iter()
        .fold(initial, |state, action| reduce(&state, action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in(storage: Option<StorageKind>) -> SessionState {
        SessionState {
            storage,
            ..SessionState::signed_in(
                UserData::new("Jane", "Doe").with_extra("email", "jane@example.com"),
                "T1".to_string(),
            )
        }
    }

    fn login(first: &str, token: &str) -> Action {
        Action::LoginValid {
            user_data: UserData::new(first, "Doe"),
            token: token.to_string(),
        }
    }

    #[test]
    fn test_login_valid_drops_storage() {
        let next = reduce(&signed_in(Some(StorageKind::Durable)), &login("Ann", "T2"));
        assert!(next.logged);
        assert_eq!(next.token.as_deref(), Some("T2"));
        assert_eq!(next.user_data.unwrap().first_name, "Ann");
        assert_eq!(next.storage, None);
    }

    #[test]
    fn test_logout_always_empties() {
        for state in [
            SessionState::empty(),
            signed_in(None),
            signed_in(Some(StorageKind::Session)),
        ] {
            assert!(reduce(&state, &Action::Logout).is_empty());
        }
    }

    #[test]
    fn test_save_storage_preserves_other_fields() {
        let before = signed_in(None);
        let after = reduce(
            &before,
            &Action::SaveStorage {
                storage: StorageKind::Session,
            },
        );
        assert_eq!(after.storage, Some(StorageKind::Session));
        assert_eq!(after.user_data, before.user_data);
        assert_eq!(after.token, before.token);

        // Overwrites an earlier choice
        let again = reduce(
            &after,
            &Action::SaveStorage {
                storage: StorageKind::Durable,
            },
        );
        assert_eq!(again.storage, Some(StorageKind::Durable));
    }

    #[test]
    fn test_profile_update_only_touches_names() {
        let before = signed_in(Some(StorageKind::Session));
        let after = reduce(
            &before,
            &Action::ProfileUpdate {
                first_name: "Janet".to_string(),
                last_name: "Smith".to_string(),
            },
        );

        let user = after.user_data.as_ref().unwrap();
        assert_eq!(user.first_name, "Janet");
        assert_eq!(user.last_name, "Smith");
        assert_eq!(user.extra, before.user_data.as_ref().unwrap().extra);
        assert_eq!(after.token, before.token);
        assert_eq!(after.logged, before.logged);
        assert_eq!(after.storage, before.storage);
    }

    #[test]
    fn test_profile_update_when_signed_out_is_noop() {
        let after = reduce(
            &SessionState::empty(),
            &Action::ProfileUpdate {
                first_name: "Janet".to_string(),
                last_name: "Doe".to_string(),
            },
        );
        assert!(after.is_empty());
        assert!(after.is_consistent());
    }

    fn alphabet() -> Vec<Action> {
        vec![
            login("Jane", "T1"),
            login("Ann", "T2"),
            Action::Logout,
            Action::SaveStorage {
                storage: StorageKind::Durable,
            },
            Action::SaveStorage {
                storage: StorageKind::Session,
            },
            Action::ProfileUpdate {
                first_name: "Janet".to_string(),
                last_name: "Roe".to_string(),
            },
        ]
    }

    /// Every sequence over `alphabet` of length `0..=max_len`.
    fn sequences(alphabet: &[Action], max_len: usize) -> Vec<Vec<Action>> {
        let mut all = vec![Vec::new()];
        let mut frontier = vec![Vec::new()];
        for _ in 0..max_len {
            frontier = frontier
                .iter()
                .flat_map(|prefix: &Vec<Action>| {
                    alphabet.iter().map(move |action| {
                        let mut next = prefix.clone();
                        next.push(action.clone());
                        next
                    })
                })
                .collect();
            all.extend(frontier.iter().cloned());
        }
        all
    }

    #[test]
    fn test_stepwise_equals_fold() {
        let initials = [
            SessionState::empty(),
            signed_in(None),
            signed_in(Some(StorageKind::Session)),
        ];
        let all = sequences(&alphabet(), 4);
        assert_eq!(all.len(), 1 + 6 + 36 + 216 + 1296);

        for initial in &initials {
            for actions in &all {
                let mut stepwise = initial.clone();
                for action in actions {
                    stepwise = reduce(&stepwise, action);
                    assert!(stepwise.is_consistent(), "{actions:?}");
                }
                assert_eq!(stepwise, fold(initial.clone(), actions), "{actions:?}");

                // Folding in two halves is the same as folding once
                let (head, tail) = actions.split_at(actions.len() / 2);
                assert_eq!(fold(fold(initial.clone(), head), tail), stepwise, "{actions:?}");
            }
        }
    }

    #[test]
    fn test_action_json_form() {
        let action = Action::from_json(
            r#"{"type":"PROFILE_UPDATE","firstName":"Janet","lastName":"Doe"}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::ProfileUpdate {
                first_name: "Janet".to_string(),
                last_name: "Doe".to_string(),
            }
        );
        assert_eq!(action.kind(), "PROFILE_UPDATE");

        let action = Action::from_json(r#"{"type":"SAVE_STORAGE","storage":"localStorage"}"#).unwrap();
        assert_eq!(
            action,
            Action::SaveStorage {
                storage: StorageKind::Durable
            }
        );
    }

    #[test]
    fn test_unknown_action_kind_is_rejected() {
        assert!(Action::from_json(r#"{"type":"TRANSFER_FUNDS","amount":100}"#).is_err());
        assert!(Action::from_json(r#"{"firstName":"Janet"}"#).is_err());
    }

    #[test]
    fn test_debug_hides_token() {
        let debug = format!("{:?}", login("Jane", "secret-token"));
        assert!(debug.contains("Jane"));
        assert!(!debug.contains("secret-token"));
    }
}
