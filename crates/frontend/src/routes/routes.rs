use contracts::domain::a104_user_profile::Role;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::dashboards::AdminDashboard;
use crate::domain::a101_product::ui::{HomePage, ProductPage};
use crate::domain::a102_cart::ui::CartPage;
use crate::layout::Shell;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::auth::RequireRole;
use crate::system::pages::{DebugPage, LoginPage};

#[component]
fn AdminRoute() -> impl IntoView {
    view! {
        <RequireRole role=Role::Admin>
            <AdminDashboard />
        </RequireRole>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="empty-state">
                <h1>"Page not found"</h1>
                <A href="/" attr:class="button button--primary">"Back to the store"</A>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/product/:id") view=ProductPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/admin") view=AdminRoute />
                    <Route path=path!("/debug") view=DebugPage />
                    <Route path=path!("/login") view=LoginPage />
                </Routes>
            </Shell>
        </Router>
    }
}
