//! PageFrame: root wrapper for every routed page.
//!
//! Sets two attributes on the root element:
//!   - `id`                 : `"{area}--{category}"`, e.g. `"a101_product--catalog"`
//!   - `data-page-category` : one of the `PAGE_CAT_*` constants

use leptos::prelude::*;

/// Product grid with filters.
pub const PAGE_CAT_CATALOG: &str = "catalog";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Cart and checkout flow.
pub const PAGE_CAT_CHECKOUT: &str = "checkout";

/// Analytical dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Sign-in, diagnostics and other system screens.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_CATALOG,
    PAGE_CAT_DETAIL,
    PAGE_CAT_CHECKOUT,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// `{area}--{category}` with both halves non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((area, cat)) if !area.is_empty() && !cat.is_empty())
}

fn frame_class(category: &str, extra: &str) -> String {
    let base = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_CHECKOUT => "page page--checkout",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

#[component]
pub fn PageFrame(
    page_id: &'static str,
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div id=page_id class=frame_class(category, class) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a102_cart--checkout"));
        assert!(!is_valid_page_id("a102_cart"));
        assert!(!is_valid_page_id("--detail"));
        assert!(!is_valid_page_id("a101_product--"));
    }

    #[test]
    fn test_frame_class() {
        assert_eq!(frame_class(PAGE_CAT_CATALOG, ""), "page");
        assert_eq!(frame_class(PAGE_CAT_DASHBOARD, "admin"), "page page--dashboard admin");
        assert!(ALL_CATEGORIES.contains(&PAGE_CAT_SYSTEM));
    }
}
