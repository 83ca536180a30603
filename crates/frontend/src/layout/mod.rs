pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;

use global_context::LayoutContext;
use left::Sidebar;
use top_header::TopHeader;

/// Application shell around every routed page.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +---------+--------------------+
/// | Sidebar |      Content       |
/// +---------+--------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let layout = LayoutContext::new();
    provide_context(layout);

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <aside
                    data-zone="left"
                    class="app-sidebar"
                    class:hidden=move || !layout.sidebar_open.get()
                >
                    <Sidebar />
                </aside>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
