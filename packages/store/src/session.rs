//! # Session store — the authoritative in-memory copy
//!
//! [`SessionStore`] owns the canonical [`SessionState`]. It is a cheap `Clone`
//! handle (shared `Arc`) that gets injected into flows and UI bindings rather
//! than living in a global. Its whole contract is:
//!
//! - [`dispatch`](SessionStore::dispatch) — apply an [`Action`] through [`reduce`],
//!   replace the state wholesale, then notify subscribers.
//! - [`state`](SessionStore::state) — a snapshot of the current state.
//! - [`subscribe`](SessionStore::subscribe) / [`unsubscribe`](SessionStore::unsubscribe)
//!   — observers called with the new state after every transition.
//!
//! Listeners run after the lock is released, so a listener may read the store
//! or dispatch again without deadlocking.
//!
//! ## Ordering
//!
//! Every transition gets a version number under the lock. Each subscriber
//! has a mailbox holding the newest undelivered state; whichever dispatcher
//! finds the mailbox idle drains it, so one listener is never called
//! concurrently, versions reach it in increasing order, and states superseded
//! before delivery are skipped. With dispatches racing on several threads a
//! subscriber may miss intermediate states but always ends on the store's
//! final one. A dispatch from inside a listener is queued and delivered once
//! that listener returns.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::action::{reduce, Action};
use crate::models::SessionState;

type Listener = Arc<dyn Fn(&SessionState) + Send + Sync>;

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Mailbox {
    /// Newest state not yet handed to the listener.
    pending: Option<(u64, SessionState)>,
    /// Highest version handed over, or claimed by `pending`.
    latest: u64,
    draining: bool,
}

#[derive(Clone)]
struct Subscriber {
    id: SubscriptionId,
    listener: Listener,
    mailbox: Arc<Mutex<Mailbox>>,
}

impl Subscriber {
    fn notify(&self, version: u64, state: &SessionState) {
        {
            let mut mailbox = lock(&self.mailbox);
            if version <= mailbox.latest {
                return;
            }
            mailbox.latest = version;
            mailbox.pending = Some((version, state.clone()));
            if mailbox.draining {
                return;
            }
            mailbox.draining = true;
        }

        loop {
            let next = {
                let mut mailbox = lock(&self.mailbox);
                match mailbox.pending.take() {
                    Some((_, next)) => next,
                    None => {
                        mailbox.draining = false;
                        return;
                    }
                }
            };
            (self.listener)(&next);
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // Values are replaced in one assignment, so a poisoned lock still holds a whole value.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
struct Inner {
    state: SessionState,
    version: u64,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

/// Shared, dispatch-driven owner of the session state.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("SessionStore")
            .field("state", &inner.state)
            .field("version", &inner.version)
            .field("listeners", &inner.subscribers.len())
            .finish()
    }
}

impl SessionStore {
    /// Create a store seeded with `initial` (usually [`Persistence::load`](crate::Persistence::load)).
    pub fn new(initial: SessionState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: initial,
                ..Inner::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock(&self.inner)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    /// Apply `action` and notify subscribers with the resulting state.
    pub fn dispatch(&self, action: Action) {
        let (version, next, subscribers) = {
            let mut inner = self.lock();
            let next = reduce(&inner.state, &action);
            inner.state = next.clone();
            inner.version += 1;
            (inner.version, next, inner.subscribers.clone())
        };

        tracing::debug!(
            action = action.kind(),
            version,
            logged = next.logged,
            storage = ?next.storage,
            "session transition"
        );

        for subscriber in subscribers {
            subscriber.notify(version, &next);
        }
    }

    /// Register `listener` to be called after every transition.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&SessionState) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        // Only transitions after this point are delivered
        let mailbox = Mailbox {
            latest: inner.version,
            ..Mailbox::default()
        };
        inner.subscribers.push(Subscriber {
            id,
            listener: Arc::new(listener),
            mailbox: Arc::new(Mutex::new(mailbox)),
        });
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|subscriber| subscriber.id != id);
        inner.subscribers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StorageKind, UserData};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn login() -> Action {
        Action::LoginValid {
            user_data: UserData::new("Jane", "Doe"),
            token: "T1".to_string(),
        }
    }

    #[test]
    fn test_starts_from_initial_state() {
        let initial = SessionState::signed_in(UserData::new("Jane", "Doe"), "T1".to_string());
        let store = SessionStore::new(initial.clone());
        assert_eq!(store.state(), initial);

        assert!(SessionStore::default().state().is_empty());
    }

    #[test]
    fn test_dispatch_replaces_state() {
        let store = SessionStore::default();
        let before = store.state();

        store.dispatch(login());
        store.dispatch(Action::SaveStorage {
            storage: StorageKind::Durable,
        });

        let after = store.state();
        assert!(before.is_empty());
        assert!(after.logged);
        assert_eq!(after.storage, Some(StorageKind::Durable));
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::default();
        let other = store.clone();
        other.dispatch(login());
        assert!(store.state().logged);
    }

    #[test]
    fn test_subscribers_see_new_state() {
        let store = SessionStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |state| sink.lock().unwrap().push(state.clone()));

        store.dispatch(login());
        store.dispatch(Action::Logout);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].logged);
        assert!(seen[1].is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = SessionStore::default();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(login());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Action::Logout);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = SessionStore::default();
        let observed = Arc::new(Mutex::new(None));

        let handle = store.clone();
        let slot = Arc::clone(&observed);
        store.subscribe(move |_| {
            *slot.lock().unwrap() = Some(handle.state().logged);
        });

        store.dispatch(login());
        assert_eq!(*observed.lock().unwrap(), Some(true));
    }

    #[test]
    fn test_dispatch_from_listener_is_queued_in_order() {
        let store = SessionStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let handle = store.clone();
        let sink = Arc::clone(&seen);
        store.subscribe(move |state| {
            sink.lock().unwrap().push(state.logged);
            if state.logged {
                handle.dispatch(Action::Logout);
            }
        });

        store.dispatch(login());

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_racing_dispatches_leave_subscriber_on_final_state() {
        for _ in 0..20 {
            let store = SessionStore::default();
            let mirror = Arc::new(Mutex::new(SessionState::empty()));

            let sink = Arc::clone(&mirror);
            store.subscribe(move |state| *sink.lock().unwrap() = state.clone());

            let workers: Vec<_> = (0..4)
                .map(|worker| {
                    let store = store.clone();
                    std::thread::spawn(move || {
                        for step in 0..50 {
                            if (worker + step) % 2 == 0 {
                                store.dispatch(login());
                            } else {
                                store.dispatch(Action::Logout);
                            }
                        }
                    })
                })
                .collect();
            for worker in workers {
                worker.join().unwrap();
            }

            assert_eq!(*mirror.lock().unwrap(), store.state());
        }
    }
}
