use contracts::domain::a104_user_profile::Role;
use contracts::system::auth::AuthState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::context::use_auth;
use crate::shared::components::ui::Spinner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Still resolving the session or profile.
    Wait,
    Allow,
    RedirectToLogin,
    RedirectHome,
}

/// A session whose profile has not resolved yet still waits, so a fresh
/// sign-in is not bounced to the login page. The auth timeout always
/// settles such a session with a fallback user.
pub fn guard_decision(state: &AuthState, required: Role) -> GuardDecision {
    if state.loading || (state.session.is_some() && state.user.is_none()) {
        return GuardDecision::Wait;
    }
    match &state.user {
        None => GuardDecision::RedirectToLogin,
        Some(user) if user.role.grants(required) => GuardDecision::Allow,
        Some(_) => GuardDecision::RedirectHome,
    }
}

/// Renders children only for users holding `role` (or a higher one).
#[component]
pub fn RequireRole(
    role: Role,
    #[prop(optional, into)]
    redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let login_path = redirect_to.unwrap_or_else(|| "/login".to_string());
    let decision = Memo::new(move |_| auth.state.with(|s| guard_decision(s, role)));

    Effect::new(move |_| match decision.get() {
        GuardDecision::RedirectToLogin => {
            log::debug!("Guard: no user, redirecting to {}", login_path);
            navigate(&login_path, NavigateOptions::default());
        }
        GuardDecision::RedirectHome => {
            log::debug!("Guard: role {} required, redirecting home", role.as_str());
            navigate("/", NavigateOptions::default());
        }
        GuardDecision::Wait | GuardDecision::Allow => {}
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                (decision.get() == GuardDecision::Wait)
                    .then(|| view! { <Spinner label="Loading..." /> })
            }
        >
            {children()}
        </Show>
    }
}
