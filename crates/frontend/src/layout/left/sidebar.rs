//! Navigation sidebar. Entries depend on the signed-in role.

use contracts::domain::a104_user_profile::RoleFlags;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

const fn item(label: &'static str, href: &'static str, icon: &'static str) -> NavItem {
    NavItem { label, href, icon }
}

/// Storefront links for everyone, the dashboard for admins, diagnostics last.
pub fn nav_items(flags: RoleFlags) -> Vec<NavItem> {
    let mut items = vec![item("Store", "/", "products"), item("Cart", "/cart", "cart")];
    if flags.is_admin {
        items.push(item("Dashboard", "/admin", "dashboard"));
    }
    items.push(item("Debug", "/debug", "bug"));
    items
}

/// `/` only matches itself; other entries also match their sub-paths.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/" || pathname.starts_with("/product/")
    } else {
        pathname == href || pathname.starts_with(&format!("{}/", href))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let layout = use_layout();
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            {move || {
                nav_items(auth.flags())
                    .into_iter()
                    .map(|entry| {
                        let active = move || pathname.with(|p| is_active(entry.href, p));
                        view! {
                            <A
                                href=entry.href
                                attr:class=move || {
                                    if active() {
                                        "app-sidebar__item app-sidebar__item--active"
                                    } else {
                                        "app-sidebar__item"
                                    }
                                }
                                on:click=move |_| {
                                    if is_narrow_screen() {
                                        layout.close_sidebar();
                                    }
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(entry.icon)}
                                    <span>{entry.label}</span>
                                </div>
                            </A>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

fn is_narrow_screen() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .is_some_and(|width| width < 768.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(flags: RoleFlags) -> Vec<&'static str> {
        nav_items(flags).into_iter().map(|i| i.href).collect()
    }

    #[test]
    fn test_dashboard_link_only_for_admins() {
        let buyer = RoleFlags {
            is_admin: false,
            is_seller: false,
            is_buyer: true,
        };
        let admin = RoleFlags {
            is_admin: true,
            is_seller: true,
            is_buyer: true,
        };
        assert_eq!(hrefs(buyer), vec!["/", "/cart", "/debug"]);
        assert_eq!(hrefs(admin), vec!["/", "/cart", "/admin", "/debug"]);
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/", "/"));
        assert!(is_active("/", "/product/p-1"));
        assert!(!is_active("/", "/cart"));
        assert!(is_active("/admin", "/admin"));
        assert!(is_active("/admin", "/admin/orders"));
        assert!(!is_active("/admin", "/administrator"));
    }
}
