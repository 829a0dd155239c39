//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] builds the session once per app: it rehydrates the
//! [`SessionStore`](store::SessionStore) from browser storage, subscribes a
//! signal to it so components re-render on every transition, and puts both in
//! context. Components read the state with [`use_session`] and run flows
//! through [`use_flows`].

use api::{CancellationToken, ClientConfig, HttpClient, SessionFlows};
use dioxus::prelude::*;
use store::SessionState;

use crate::storage::make_persistence;

/// Flows wired to the real backend.
pub type Flows = SessionFlows<HttpClient>;

/// What [`SessionProvider`] puts in context.
#[derive(Clone)]
pub struct SessionContext {
    pub flows: Flows,
    pub state: SyncSignal<SessionState>,
}

/// Get the current session state.
/// Returns a signal that updates after every store transition.
pub fn use_session() -> SyncSignal<SessionState> {
    use_context::<SessionContext>().state
}

/// Get the flows to sign in, edit the profile or sign out.
pub fn use_flows() -> Flows {
    use_context::<SessionContext>().flows
}

/// A cancellation token that fires when the calling component unmounts.
///
/// Pass it to a flow so a late reply after the view is gone is dropped.
pub fn use_view_cancellation() -> CancellationToken {
    let token = use_hook(CancellationToken::new);
    let on_drop = token.clone();
    use_drop(move || on_drop.cancel());
    token
}

fn make_client() -> HttpClient {
    let config = load_config().unwrap_or_else(|e| {
        tracing::error!("config file ignored: {e}");
        ClientConfig::from_env()
    });
    HttpClient::new(&config).unwrap_or_else(|e| {
        tracing::error!("backend configuration ignored: {e}");
        HttpClient::default()
    })
}

/// Native builds also read `<config dir>/argentbank/config.toml`.
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<ClientConfig, api::ConfigError> {
    match dirs::config_dir() {
        Some(dir) => ClientConfig::load(&dir.join("argentbank").join("config.toml")),
        None => Ok(ClientConfig::from_env()),
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> Result<ClientConfig, api::ConfigError> {
    Ok(ClientConfig::from_env())
}

/// Provider component that owns the session store.
/// Wrap your app with this component to enable sign-in.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let flows = use_hook(|| Flows::restore(make_client(), make_persistence()));
    let state = use_signal_sync(|| flows.store().state());

    // Mirror every transition into the signal
    let subscription = use_hook(|| {
        flows.store().subscribe(move |next| {
            let mut state = state;
            state.set(next.clone());
        })
    });
    let store = flows.store().clone();
    use_drop(move || {
        store.unsubscribe(subscription);
    });

    use_context_provider(|| SessionContext { flows, state });

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn SignOutButton(
    on_signed_out: EventHandler<()>,
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let flows = use_flows();

    let onclick = move |_| {
        flows.sign_out();
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
