use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a102_cart::use_cart;
use crate::shared::icons::icon;

/// Counter text for the header badge; capped so it fits the bubble.
pub fn badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

/// Header cart link with the total unit count.
#[component]
pub fn CartBadge() -> impl IntoView {
    let cart = use_cart();

    view! {
        <A href="/cart" attr:class="top-header-icon-btn cart-badge" attr:title="Cart">
            {icon("cart")}
            {move || badge_label(cart.item_count()).map(|label| view! {
                <span class="cart-badge__count">{label}</span>
            })}
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(150).as_deref(), Some("99+"));
    }
}
