use std::sync::Arc;

use leptos::prelude::*;
use thaw::ConfigProvider;

use crate::config::{AppConfig, ConfigError};
use crate::domain::a102_cart::CartProvider;
use crate::routes::AppRoutes;
use crate::shared::storage::{BrowserStore, SharedStore};
use crate::shared::supabase::SupabaseClient;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::AuthProvider;

/// Root component. Context order matters: auth needs the client, pages need all three providers.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(SupabaseClient::new(config));
    let store: SharedStore = Arc::new(BrowserStore);

    view! {
        <ConfigProvider>
            <ThemeProvider store=store.clone()>
                <CartProvider store=store.clone()>
                    <AuthProvider store=store>
                        <AppRoutes />
                    </AuthProvider>
                </CartProvider>
            </ThemeProvider>
        </ConfigProvider>
    }
}

/// Mounted instead of [`App`] when the build lacks backend settings.
#[component]
pub fn ConfigErrorScreen(error: ConfigError) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"Configuration error"</h1>
            <p>{error.to_string()}</p>
            <p class="muted">
                "Set SUPABASE_URL and SUPABASE_ANON_KEY in the build environment and rebuild."
            </p>
        </div>
    }
}
