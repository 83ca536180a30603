use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::use_auth;

fn validate(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        if let Err(msg) = validate(&email_val, &password_val) {
            set_error_message.set(Some(msg.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match auth.sign_in(&email_val, &password_val).await {
                Ok(()) => {
                    set_password.set(String::new());
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("Sign in failed: {}", e);
                    set_error_message.set(Some(format!("Sign in failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    let signed_in_as = move || auth.user().map(|u| u.email);

    view! {
        <PageFrame page_id="system_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Marketplace"</h1>
                    <h2>"Sign in"</h2>

                    {move || signed_in_as().map(|email| view! {
                        <div class="info-message">
                            "Already signed in as " <strong>{email}</strong> ". "
                            <A href="/">"Back to the store"</A>
                        </div>
                    })}

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary button--block"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate("a@b.co", "secret").is_ok());
        assert_eq!(validate("  ", "secret"), Err("Enter a valid email address."));
        assert_eq!(validate("not-an-email", "secret"), Err("Enter a valid email address."));
        assert_eq!(validate("a@b.co", ""), Err("Enter your password."));
    }
}
