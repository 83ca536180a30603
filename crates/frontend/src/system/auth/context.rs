//! Auth context: session, profile-backed user and role flags.
//!
//! On mount the provider restores the stored session, resolves the user's
//! profile and clears `loading`. A hard timeout clears `loading` regardless
//! and settles a session whose profile never arrived with the fallback user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use contracts::domain::a104_user_profile::RoleFlags;
use contracts::system::auth::{AuthEvent, AuthState, AuthUser, Session, SessionUser};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::events::{AuthEvents, AuthListener, SubscriptionId};
use super::{api, storage};
use crate::shared::storage::{KeyValueStore, SharedStore};
use crate::shared::supabase::{use_supabase, ApiError, SupabaseClient};

pub const AUTH_LOADING_TIMEOUT_MS: u32 = 10_000;

/// Where the mount-time session came from.
#[derive(Debug, Clone, PartialEq)]
enum Restored {
    Absent,
    Stored(Session),
    /// Expired and refreshed; `TokenRefreshed` has been published.
    Refreshed(Session),
}

/// Persisted session as found at start-up.
#[derive(Debug, Clone, PartialEq)]
enum Stored {
    Missing,
    Valid(Session),
    Expired(Session),
}

fn stored_session(store: &dyn KeyValueStore, now: DateTime<Utc>) -> Stored {
    match storage::load_session(store) {
        None => Stored::Missing,
        Some(session) if session.is_expired(now) => Stored::Expired(session),
        Some(session) => Stored::Valid(session),
    }
}

impl Restored {
    fn session(self) -> Option<Session> {
        match self {
            Restored::Absent => None,
            Restored::Stored(session) | Restored::Refreshed(session) => Some(session),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    client: StoredValue<SupabaseClient>,
    store: StoredValue<SharedStore>,
    events: StoredValue<AuthEvents>,
}

impl AuthContext {
    pub fn new(client: SupabaseClient, store: SharedStore) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            client: StoredValue::new(client),
            store: StoredValue::new(store),
            events: StoredValue::new(AuthEvents::new()),
        }
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.with(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Derived on every read from the current user's role.
    pub fn flags(&self) -> RoleFlags {
        self.state.with(AuthState::flags)
    }

    pub fn profile_error(&self) -> Option<String> {
        self.state.with(|s| s.profile_error.clone())
    }

    fn access_token(&self) -> Option<String> {
        self.state
            .try_with_untracked(|s| s.session.as_ref().map(|s| s.access_token.clone()))
            .flatten()
    }

    /// Stored session; an expired one is refreshed (publishing
    /// `TokenRefreshed`) or dropped when the refresh fails.
    pub async fn get_session(&self) -> Option<Session> {
        self.restore_session().await.session()
    }

    async fn restore_session(&self) -> Restored {
        let store = self.store.get_value();
        let session = match stored_session(&*store, Utc::now()) {
            Stored::Missing => return Restored::Absent,
            Stored::Valid(session) => return Restored::Stored(session),
            Stored::Expired(session) => session,
        };

        log::info!("Stored session expired, refreshing");
        let client = self.client.get_value();
        match api::refresh_session(&client, &session.refresh_token).await {
            Ok(fresh) => {
                storage::save_session(&*store, &fresh);
                self.events
                    .get_value()
                    .emit(AuthEvent::TokenRefreshed, Some(&fresh));
                Restored::Refreshed(fresh)
            }
            Err(e) => {
                log::warn!("Session refresh failed, signing out locally: {}", e);
                storage::clear_session(&*store);
                Restored::Absent
            }
        }
    }

    /// Mount-time restore: session, then profile. A refreshed session was
    /// already applied by the `TokenRefreshed` listener, which also started
    /// the profile lookup.
    pub async fn initialize(&self) {
        let session = match self.restore_session().await {
            Restored::Refreshed(_) => {
                log::debug!("Initial session refreshed; profile load already scheduled");
                return;
            }
            restored => restored.session(),
        };
        log::debug!("Initial session present: {}", session.is_some());
        let user = self
            .state
            .try_update(|s| s.session_restored(session))
            .flatten();
        if let Some(user) = user {
            self.load_profile(user).await;
        }
    }

    async fn load_profile(&self, user: SessionUser) {
        let client = self.client.get_value();
        let token = self.access_token();
        let outcome = api::fetch_profile(&client, &user.id, token.as_deref()).await;
        self.state
            .try_update(|s| s.profile_resolved(&user, outcome));
        let resolved = self
            .state
            .try_with_untracked(|s| {
                s.user
                    .as_ref()
                    .map(|u| format!("{} ({})", u.display_name(), u.role.as_str()))
            })
            .flatten();
        if let Some(name) = resolved {
            log::info!("Auth user resolved: {}", name);
        }
    }

    /// Applies an auth event to the state and re-fetches the profile when
    /// the event carries a session.
    fn handle_event(&self, event: AuthEvent, session: Option<Session>) {
        log::info!("Auth state change: {}", event.as_str());
        let refetch = self
            .state
            .try_update(|s| s.apply_event(event, session))
            .flatten();
        if let Some(user) = refetch {
            let ctx = *self;
            spawn_local(async move { ctx.load_profile(user).await });
            self.arm_timeout();
        }
    }

    /// Settles whatever is still pending after [`AUTH_LOADING_TIMEOUT_MS`].
    fn arm_timeout(&self) {
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTH_LOADING_TIMEOUT_MS).await;
            if ctx.state.try_update(AuthState::loading_timed_out) == Some(true) {
                log::warn!(
                    "Auth loading timed out after {} ms",
                    AUTH_LOADING_TIMEOUT_MS
                );
            }
        });
    }

    /// Registers this context as an event listener.
    pub fn listen(&self) -> SubscriptionId {
        let ctx = *self;
        let listener: AuthListener = Arc::new(move |event: AuthEvent, session: Option<Session>| {
            ctx.handle_event(event, session)
        });
        self.events.get_value().subscribe(listener)
    }

    pub fn stop_listening(&self, id: SubscriptionId) {
        if let Some(events) = self.events.try_get_value() {
            events.unsubscribe(id);
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let client = self.client.get_value();
        let session = api::sign_in_with_password(&client, email, password).await?;
        storage::save_session(&*self.store.get_value(), &session);
        log::info!("Signed in: {}", session.user.email.as_deref().unwrap_or(&session.user.id));
        self.events
            .get_value()
            .emit(AuthEvent::SignedIn, Some(&session));
        Ok(())
    }

    /// Always clears local state, even when the server call fails.
    pub async fn sign_out(&self) {
        if let Some(token) = self.access_token() {
            let client = self.client.get_value();
            if let Err(e) = api::sign_out(&client, &token).await {
                log::warn!("Remote sign out failed: {}", e);
            }
        }
        self.sign_out_locally();
    }

    fn sign_out_locally(&self) {
        storage::clear_session(&*self.store.get_value());
        self.events.get_value().emit(AuthEvent::SignedOut, None);
    }
}

/// Provides [`AuthContext`]; expects a [`SupabaseClient`] in context.
#[component]
pub fn AuthProvider(store: SharedStore, children: Children) -> impl IntoView {
    let ctx = AuthContext::new(use_supabase(), store);
    provide_context(ctx);

    let subscription = ctx.listen();
    on_cleanup(move || ctx.stop_listening(subscription));

    spawn_local(async move { ctx.initialize().await });
    ctx.arm_timeout();

    children()
}

/// Hook to access auth state.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::shared::storage::MemoryStore;
    use contracts::domain::a104_user_profile::Role;

    fn context(store: SharedStore) -> AuthContext {
        let client = SupabaseClient::new(
            AppConfig::from_values(Some("https://shop.supabase.co"), Some("anon")).unwrap(),
        );
        AuthContext::new(client, store)
    }

    fn signed_in_state() -> AuthState {
        let user = SessionUser {
            id: "u1".to_string(),
            email: Some("owner@shop.io".to_string()),
        };
        let mut state = AuthState::default();
        state.session_restored(Some(Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at: None,
            user: user.clone(),
        }));
        state.profile_resolved(&user, contracts::system::auth::ProfileOutcome::NotFound);
        state
    }

    #[test]
    fn test_signed_out_event_clears_state_and_storage() {
        let owner = Owner::new();
        owner.set();

        let store = MemoryStore::shared();
        store.set(storage::SESSION_STORAGE_KEY, "{}");
        let ctx = context(store.clone());
        ctx.listen();
        ctx.state.set(signed_in_state());
        assert!(ctx.flags().is_buyer);

        ctx.sign_out_locally();

        assert!(ctx.user().is_none());
        assert!(!ctx.is_loading());
        assert_eq!(ctx.flags(), RoleFlags::default());
        assert_eq!(store.get(storage::SESSION_STORAGE_KEY), None);
    }

    #[test]
    fn test_stored_session_classification() {
        let store = MemoryStore::shared();
        let now = Utc::now();
        assert_eq!(stored_session(&*store, now), Stored::Missing);

        let mut session = signed_in_state().session.unwrap();
        storage::save_session(&*store, &session);
        assert_eq!(stored_session(&*store, now), Stored::Valid(session.clone()));

        session.expires_at = Some(now.timestamp() - 60);
        storage::save_session(&*store, &session);
        assert_eq!(stored_session(&*store, now), Stored::Expired(session.clone()));

        assert_eq!(Restored::Refreshed(session.clone()).session(), Some(session));
        assert_eq!(Restored::Absent.session(), None);
    }

    #[test]
    fn test_stop_listening() {
        let owner = Owner::new();
        owner.set();

        let ctx = context(MemoryStore::shared());
        let id = ctx.listen();
        ctx.stop_listening(id);
        ctx.state.set(signed_in_state());

        ctx.sign_out_locally();
        assert_eq!(ctx.user().map(|u| u.role), Some(Role::Buyer));
    }
}
