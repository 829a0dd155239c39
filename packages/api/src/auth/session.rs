use store::{Action, Persistence, SessionState, SessionStore, StorageKind};
use tokio_util::sync::CancellationToken;

use super::error::FlowError;
use super::form::{ProfileForm, SignInForm};
use crate::client::{ApiError, BankApi};

/// The collaborators shared by every session flow.
#[derive(Clone)]
pub struct SessionFlows<A> {
    api: A,
    store: SessionStore,
    persistence: Persistence,
}

impl<A> std::fmt::Debug for SessionFlows<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionFlows")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<A: BankApi> SessionFlows<A> {
    pub fn new(api: A, store: SessionStore, persistence: Persistence) -> Self {
        Self {
            api,
            store,
            persistence,
        }
    }

    /// Rehydrate the store from persistence and wire it up.
    pub fn restore(api: A, persistence: Persistence) -> Self {
        let store = SessionStore::new(persistence.load());
        Self::new(api, store, persistence)
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Sign in, fetch the profile, record the session and persist it.
    pub async fn sign_in(
        &self,
        form: &SignInForm,
        cancel: &CancellationToken,
    ) -> Result<SessionState, FlowError> {
        let credentials = form.validate()?;
        let storage = form.storage();

        let login = self.api.login(&credentials).await;
        if cancel.is_cancelled() {
            return Err(FlowError::Cancelled);
        }
        let login = login?;
        if !login.is_success() {
            tracing::info!(email = %credentials.email, status = login.status, "sign-in refused");
            return Err(FlowError::Rejected(login.failure_message()));
        }
        let token = login.body.ok_or(ApiError::MissingBody("login"))?.token;

        let profile = self.api.fetch_profile(&token).await;
        if cancel.is_cancelled() {
            return Err(FlowError::Cancelled);
        }
        let profile = profile?;
        if !profile.is_success() {
            tracing::info!(status = profile.status, "profile fetch refused");
            return Err(FlowError::Rejected(profile.failure_message()));
        }
        let user_data = profile.body.ok_or(ApiError::MissingBody("profile"))?;

        self.store.dispatch(Action::LoginValid { user_data, token });
        self.store.dispatch(Action::SaveStorage { storage });
        let state = self.store.state();
        self.persist(&state, storage);

        tracing::info!(email = %credentials.email, %storage, "signed in");
        Ok(state)
    }

    /// Send new names to the backend and apply them locally once accepted.
    pub async fn edit_profile(
        &self,
        form: &ProfileForm,
        cancel: &CancellationToken,
    ) -> Result<SessionState, FlowError> {
        let update = form.validate()?;
        let Some(token) = self.store.state().token else {
            return Err(FlowError::NotSignedIn);
        };

        let reply = self.api.update_profile(&token, &update).await;
        if cancel.is_cancelled() {
            return Err(FlowError::Cancelled);
        }
        let reply = reply?;
        if !reply.is_success() {
            tracing::info!(status = reply.status, "profile update refused");
            return Err(FlowError::Rejected(reply.failure_message()));
        }

        self.store.dispatch(Action::ProfileUpdate {
            first_name: update.first_name,
            last_name: update.last_name,
        });
        let state = self.store.state();
        match state.storage {
            Some(kind) => self.persist(&state, kind),
            None => tracing::debug!("no storage preference recorded, profile change kept in memory"),
        }
        Ok(state)
    }

    /// Forget the session in memory and in both storage backends.
    pub fn sign_out(&self) {
        self.store.dispatch(Action::Logout);
        if let Err(e) = self.persistence.clear() {
            tracing::warn!("stored session not cleared: {e}");
        }
        tracing::info!("signed out");
    }

    fn persist(&self, state: &SessionState, kind: StorageKind) {
        // Best effort: the store stays the source of truth.
        if let Err(e) = self.persistence.save(state, kind) {
            tracing::warn!("session not persisted: {e}");
        }
    }
}
