//! Auth state transitions.
//!
//! The provider in the frontend drives these from network results and auth
//! events; keeping them here makes the fallback rules testable without a
//! browser.

use crate::domain::a104_user_profile::{RoleFlags, UserProfile};

use super::{AuthEvent, AuthUser, Session, SessionUser};

/// Result of the profile lookup for a session user.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    Found(UserProfile),
    NotFound,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub user: Option<AuthUser>,
    pub loading: bool,
    pub profile_error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            user: None,
            loading: true,
            profile_error: None,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role flags of the current user; all false when signed out.
    pub fn flags(&self) -> RoleFlags {
        self.user
            .as_ref()
            .map(|user| user.role.flags())
            .unwrap_or_default()
    }

    /// Initial `get_session` finished. Returns the user whose profile must be
    /// fetched next, if any. Loading stays on until the profile resolves.
    pub fn session_restored(&mut self, session: Option<Session>) -> Option<SessionUser> {
        let user = session.as_ref().map(|s| s.user.clone());
        self.session = session;
        if user.is_none() {
            self.loading = false;
        }
        user
    }

    /// Applies the outcome of a profile lookup. Missing or unreachable
    /// profiles keep the session signed in with a fallback buyer. Lookups
    /// for a user that is no longer the session user are ignored.
    pub fn profile_resolved(&mut self, user: &SessionUser, outcome: ProfileOutcome) {
        if !self.session.as_ref().is_some_and(|s| s.user.id == user.id) {
            return;
        }
        match outcome {
            ProfileOutcome::Found(profile) => {
                self.profile_error = None;
                self.user = Some(AuthUser::from_profile(user, profile));
            }
            ProfileOutcome::NotFound => {
                self.profile_error = Some("Profile not found".to_string());
                self.user = Some(AuthUser::fallback(user));
            }
            ProfileOutcome::Failed(message) => {
                self.profile_error = Some(message);
                self.user = Some(AuthUser::fallback(user));
            }
        }
        self.loading = false;
    }

    /// Applies an auth-change notification. Returns the user whose profile
    /// must be re-fetched, if any.
    pub fn apply_event(&mut self, event: AuthEvent, session: Option<Session>) -> Option<SessionUser> {
        let refetch = match event {
            AuthEvent::SignedIn | AuthEvent::TokenRefreshed => {
                let user = session.as_ref().map(|s| s.user.clone());
                self.session = session;
                user
            }
            AuthEvent::SignedOut => {
                self.clear();
                None
            }
        };
        self.loading = false;
        refetch
    }

    /// Local sign-out; independent of whether the remote call succeeded.
    pub fn clear(&mut self) {
        self.session = None;
        self.user = None;
        self.profile_error = None;
    }

    /// Message kept in `profile_error` when the timeout settles a session.
    pub const PROFILE_TIMEOUT: &'static str = "Profile request timed out";

    /// Hard timeout elapsed. A session still waiting for its profile gets
    /// the fallback buyer, so nothing keeps waiting on the lookup. Returns
    /// true when it actually changed the state.
    pub fn loading_timed_out(&mut self) -> bool {
        let mut changed = self.loading;
        self.loading = false;
        if self.user.is_none() {
            if let Some(session) = &self.session {
                self.user = Some(AuthUser::fallback(&session.user));
                self.profile_error = Some(Self::PROFILE_TIMEOUT.to_string());
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a104_user_profile::Role;

    fn session(email: &str) -> Session {
        Session {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at: None,
            user: SessionUser {
                id: "u1".to_string(),
                email: Some(email.to_string()),
            },
        }
    }

    fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: None,
            name: Some("Seller Sam".to_string()),
            role,
            avatar_url: None,
            bio: None,
            website: None,
            location: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_starts_loading_and_signed_out() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert_eq!(state.flags(), RoleFlags::default());
    }

    #[test]
    fn test_no_session_stops_loading() {
        let mut state = AuthState::default();
        assert!(state.session_restored(None).is_none());
        assert!(!state.loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_session_then_profile() {
        let mut state = AuthState::default();
        let user = state.session_restored(Some(session("sam@shop.io"))).unwrap();
        assert!(state.loading);

        state.profile_resolved(&user, ProfileOutcome::Found(profile(Role::Seller)));
        assert!(!state.loading);
        assert!(state.flags().is_seller);
        assert!(!state.flags().is_admin);
        assert!(state.profile_error.is_none());
    }

    #[test]
    fn test_missing_profile_falls_back_to_buyer() {
        let mut state = AuthState::default();
        let user = state.session_restored(Some(session("sam@shop.io"))).unwrap();
        state.profile_resolved(&user, ProfileOutcome::NotFound);

        let current = state.user.clone().unwrap();
        assert_eq!(current.role, Role::Buyer);
        assert_eq!(current.name.as_deref(), Some("sam"));
        assert!(state.flags().is_buyer);
        assert!(state.profile_error.is_some());
    }

    #[test]
    fn test_failed_profile_keeps_session_signed_in() {
        let mut state = AuthState::default();
        let user = state.session_restored(Some(session("sam@shop.io"))).unwrap();
        state.profile_resolved(&user, ProfileOutcome::Failed("HTTP 503".to_string()));

        assert!(state.is_authenticated());
        assert!(state.session.is_some());
        assert_eq!(state.profile_error.as_deref(), Some("HTTP 503"));
    }

    #[test]
    fn test_events() {
        let mut state = AuthState::default();
        let refetch = state.apply_event(AuthEvent::SignedIn, Some(session("a@b.c")));
        assert_eq!(refetch.map(|u| u.id), Some("u1".to_string()));
        assert!(!state.loading);

        let user = state.session.as_ref().unwrap().user.clone();
        state.profile_resolved(&user, ProfileOutcome::Found(profile(Role::Admin)));
        assert!(state.flags().is_admin);

        assert!(state
            .apply_event(AuthEvent::TokenRefreshed, Some(session("a@b.c")))
            .is_some());
        assert!(state.flags().is_admin);

        assert!(state.apply_event(AuthEvent::SignedOut, None).is_none());
        assert!(state.session.is_none());
        assert!(state.user.is_none());
        assert!(state.profile_error.is_none());
        assert_eq!(state.flags(), RoleFlags::default());
    }

    #[test]
    fn test_stale_profile_after_sign_out_is_ignored() {
        let mut state = AuthState::default();
        let user = state.session_restored(Some(session("a@b.c"))).unwrap();
        state.apply_event(AuthEvent::SignedOut, None);

        state.profile_resolved(&user, ProfileOutcome::Found(profile(Role::Admin)));
        assert!(state.user.is_none());
        assert!(!state.flags().is_admin);
    }

    #[test]
    fn test_timeout_only_reports_first_change() {
        let mut state = AuthState::default();
        assert!(state.loading_timed_out());
        assert!(!state.loading);
        assert!(!state.loading_timed_out());
    }

    #[test]
    fn test_timeout_settles_session_without_profile() {
        let mut state = AuthState::default();
        let user = state.session_restored(Some(session("sam@shop.io"))).unwrap();
        assert!(state.user.is_none());

        assert!(state.loading_timed_out());
        assert!(!state.loading);
        assert!(state.is_authenticated());
        assert!(state.flags().is_buyer);
        assert_eq!(state.profile_error.as_deref(), Some(AuthState::PROFILE_TIMEOUT));

        // A late answer still wins.
        state.profile_resolved(&user, ProfileOutcome::Found(profile(Role::Admin)));
        assert!(state.flags().is_admin);
        assert!(state.profile_error.is_none());
        assert!(!state.loading_timed_out());
    }

    #[test]
    fn test_timeout_keeps_resolved_user() {
        let mut state = AuthState::default();
        let user = state.session_restored(Some(session("sam@shop.io"))).unwrap();
        state.profile_resolved(&user, ProfileOutcome::Found(profile(Role::Seller)));

        assert!(!state.loading_timed_out());
        assert!(state.flags().is_seller);
        assert!(state.profile_error.is_none());
    }
}
