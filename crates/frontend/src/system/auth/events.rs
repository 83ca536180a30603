//! Auth-change notifications.
//!
//! Every session transition (sign in, refresh, sign out) is published here;
//! the auth context subscribes once at mount and unsubscribes on cleanup.

use std::sync::{Arc, Mutex};

use contracts::system::auth::{AuthEvent, Session};

pub type AuthListener = Arc<dyn Fn(AuthEvent, Option<Session>) + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, AuthListener)>,
}

#[derive(Clone, Default)]
pub struct AuthEvents {
    inner: Arc<Mutex<Listeners>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: AuthListener) -> SubscriptionId {
        let Ok(mut listeners) = self.inner.lock() else {
            log::warn!("Auth listener registry poisoned; subscription ignored");
            return SubscriptionId(u64::MAX);
        };
        let id = SubscriptionId(listeners.next_id);
        listeners.next_id += 1;
        listeners.entries.push((id, listener));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut listeners) = self.inner.lock() {
            listeners.entries.retain(|(entry_id, _)| *entry_id != id);
        }
    }

    /// Calls listeners in subscription order. The registry lock is released
    /// first so a listener may subscribe or unsubscribe.
    pub fn emit(&self, event: AuthEvent, session: Option<&Session>) {
        let listeners: Vec<AuthListener> = match self.inner.lock() {
            Ok(listeners) => listeners.entries.iter().map(|(_, l)| l.clone()).collect(),
            Err(_) => return,
        };
        log::debug!("Auth event {} -> {} listener(s)", event.as_str(), listeners.len());
        for listener in listeners {
            listener(event, session.cloned());
        }
    }
}
