//! This crate contains all shared UI for the workspace.

mod accounts;
pub use accounts::{Account, AccountList, DEMO_ACCOUNTS};

mod auth;
pub use auth::{
    use_flows, use_session, use_view_cancellation, Flows, SessionContext, SessionProvider,
    SignOutButton,
};

mod navbar;
pub use navbar::Navbar;

mod profile;
pub use profile::{ErrorNotice, ProfileView};

mod sign_in;
pub use sign_in::SignIn;

mod storage;
pub use storage::make_persistence;
