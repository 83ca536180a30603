use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::shared::components::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::use_auth;

fn presence(value: Option<&str>) -> &'static str {
    if value.is_some_and(|v| !v.trim().is_empty()) {
        "Set"
    } else {
        "Missing"
    }
}

/// Build-time configuration summary. Values are never shown, only presence.
pub fn environment_rows() -> Vec<(&'static str, &'static str)> {
    vec![
        ("SUPABASE_URL", presence(option_env!("SUPABASE_URL"))),
        ("SUPABASE_ANON_KEY", presence(option_env!("SUPABASE_ANON_KEY"))),
        (
            "BUILD_MODE",
            if cfg!(debug_assertions) { "development" } else { "production" },
        ),
    ]
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

#[component]
fn FlagRow(label: &'static str, #[prop(into)] value: Signal<bool>) -> impl IntoView {
    view! {
        <div class="debug-row">
            <span>{label}</span>
            <span class=move || if value.get() { "badge badge--success" } else { "badge badge--neutral" }>
                {move || yes_no(value.get())}
            </span>
        </div>
    }
}

/// `/debug`: configuration and auth state at a glance.
#[component]
pub fn DebugPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_: leptos::ev::MouseEvent| navigate(path, NavigateOptions::default())
    };

    let reload = move |_| {
        if let Some(win) = web_sys::window() {
            let _ = win.location().reload();
        }
    };

    view! {
        <PageFrame page_id="system_debug--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Debug Information" subtitle="Build settings and the current session" />
            <div class="page__content debug-grid">
                <section class="card">
                    <h2>"Environment"</h2>
                    {environment_rows()
                        .into_iter()
                        .map(|(key, value)| {
                            let class = if value == "Missing" { "badge badge--error" } else { "badge badge--success" };
                            view! {
                                <div class="debug-row">
                                    <span class="mono">{key}</span>
                                    <span class=class>{value}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="card">
                    <h2>"Authentication State"</h2>
                    <FlagRow label="Loading" value=Signal::derive(move || auth.is_loading()) />
                    <FlagRow label="Authenticated" value=Signal::derive(move || auth.is_authenticated()) />
                    <FlagRow label="Admin" value=Signal::derive(move || auth.flags().is_admin) />
                    <FlagRow label="Seller" value=Signal::derive(move || auth.flags().is_seller) />
                    <FlagRow label="Buyer" value=Signal::derive(move || auth.flags().is_buyer) />
                    {move || auth.profile_error().map(|e| view! {
                        <div class="debug-row">
                            <span>"Profile error"</span>
                            <span class="badge badge--warning">{e}</span>
                        </div>
                    })}
                </section>

                {move || auth.user().map(|user| view! {
                    <section class="card card--wide">
                        <h2>"User Details"</h2>
                        <dl class="debug-details">
                            <dt>"ID"</dt><dd class="mono">{user.id.clone()}</dd>
                            <dt>"Email"</dt><dd>{user.email.clone()}</dd>
                            <dt>"Name"</dt><dd>{user.name.clone().unwrap_or_else(|| "Not set".to_string())}</dd>
                            <dt>"Role"</dt><dd>{user.role.display_name()}</dd>
                        </dl>
                    </section>
                })}

                <section class="card card--wide">
                    <h2>"Actions"</h2>
                    <div class="button-row">
                        <button class="button button--secondary" on:click=reload>"Reload Page"</button>
                        <button class="button button--primary" on:click=go("/admin")>"Go to Admin Dashboard"</button>
                        <button class="button button--ghost" on:click=go("/login")>"Go to Login"</button>
                    </div>
                </section>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert_eq!(presence(None), "Missing");
        assert_eq!(presence(Some(" ")), "Missing");
        assert_eq!(presence(Some("https://x.supabase.co")), "Set");
    }

    #[test]
    fn test_environment_rows_never_expose_values() {
        let rows = environment_rows();
        assert_eq!(rows.len(), 3);
        for (_, value) in rows {
            assert!(["Set", "Missing", "development", "production"].contains(&value));
        }
    }
}
