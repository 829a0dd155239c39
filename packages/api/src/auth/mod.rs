//! # Session orchestration flows
//!
//! The flows turn a user action into network calls, transition requests and
//! persistence writes. They are methods on [`SessionFlows`], which bundles the
//! three collaborators a flow needs: a [`BankApi`](crate::BankApi), the
//! [`SessionStore`](store::SessionStore) and the
//! [`Persistence`](store::Persistence) adapter.
//!
//! | Flow | Network | Actions dispatched | Persisted to |
//! |------|---------|--------------------|--------------|
//! | [`sign_in`](SessionFlows::sign_in) | `user/login`, then `user/profile` | `LOGIN_VALID`, `SAVE_STORAGE` | the backend picked by "remember me" |
//! | [`edit_profile`](SessionFlows::edit_profile) | `PUT user/profile` | `PROFILE_UPDATE` | the backend recorded in state |
//! | [`sign_out`](SessionFlows::sign_out) | — | `LOGOUT` | both backends cleared |
//!
//! Failures never touch the store. A refused request surfaces the server's
//! message verbatim ([`FlowError::Rejected`]); a transport failure surfaces
//! the generic "Error with server" ([`FlowError::Server`]).
//!
//! ## Cancellation
//!
//! Each flow takes a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! owned by the view that started it. The token is checked after every
//! network await; a cancelled flow returns [`FlowError::Cancelled`] without
//! dispatching or persisting anything.

mod error;
mod form;
mod session;

pub use error::FlowError;
pub use form::{ProfileForm, SignInForm};
pub use session::SessionFlows;
