//! Top bar: sidebar toggle, brand, cart, theme switch and account actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::domain::a102_cart::ui::CartBadge;
use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::auth::use_auth;

#[component]
fn AccountMenu() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());

    let sign_out = move |_| {
        spawn_local(async move {
            auth.sign_out().await;
            navigate.with_value(|nav| nav("/", NavigateOptions::default()));
        });
    };

    view! {
        {move || match auth.user() {
            Some(user) => view! {
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user.display_name().to_string()}</span>
                    <span class="top-header__role">{user.role.display_name()}</span>
                </div>
                <button class="top-header-icon-btn" on:click=sign_out title="Sign out">
                    {icon("logout")}
                </button>
            }
            .into_any(),
            None if auth.is_loading() => view! { <span class="top-header__user muted">"..."</span> }.into_any(),
            None => view! {
                <A href="/login" attr:class="button button--secondary button--sm">"Sign in"</A>
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let layout = use_layout();
    let is_sidebar_visible = move || layout.sidebar_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header-icon-btn"
                    on:click=move |_| layout.toggle_sidebar()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <A href="/" attr:class="top-header__title">"Digital Market"</A>
            </div>

            <div class="top-header__actions">
                <CartBadge />
                <ThemeToggle />
                <AccountMenu />
            </div>
        </header>
    }
}
