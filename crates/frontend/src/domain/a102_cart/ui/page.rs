use contracts::domain::a102_cart::CartItem;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a102_cart::use_cart;
use crate::shared::components::table::format_money;
use crate::shared::components::ui::{Button, ButtonSize, ButtonVariant};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CHECKOUT};

fn items_label(count: u32) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="cart-empty">
            <div class="cart-empty__icon">{icon("cart")}</div>
            <h2>"Your cart is empty"</h2>
            <p>"Looks like you haven't added any products to your cart yet."</p>
            <A href="/" attr:class="button button--primary">
                {icon("arrow-left")}
                "Continue Shopping"
            </A>
        </div>
    }
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let cart = use_cart();
    let id = StoredValue::new(item.id.clone());
    let quantity = item.quantity;
    let at_minimum = quantity <= 1;

    let original = item
        .has_discount()
        .then(|| item.original_price.map(format_money))
        .flatten();

    view! {
        <div class="cart-line">
            <img class="cart-line__image" src=item.image_url.clone() alt=item.name.clone() />
            <div class="cart-line__details">
                <h3 class="cart-line__name">{item.name.clone()}</h3>
                <div class="cart-line__price">
                    <span class="price">{format_money(item.price)}</span>
                    {original.map(|o| view! { <span class="price price--original">{o}</span> })}
                </div>
            </div>
            <div class="cart-line__quantity">
                <button
                    class="button button--secondary button--sm"
                    disabled=at_minimum
                    on:click=move |_| cart.update_quantity(&id.get_value(), i64::from(quantity) - 1)
                >
                    "-"
                </button>
                <span class="cart-line__count">{quantity}</span>
                <button
                    class="button button--secondary button--sm"
                    on:click=move |_| cart.update_quantity(&id.get_value(), i64::from(quantity) + 1)
                >
                    "+"
                </button>
            </div>
            <div class="cart-line__total">{format_money(item.line_total())}</div>
            <button
                class="button button--ghost cart-line__remove"
                title="Remove item"
                on:click=move |_| cart.remove_item(&id.get_value())
            >
                {icon("trash")}
            </button>
        </div>
    }
}

#[component]
fn OrderSummaryPanel() -> impl IntoView {
    let cart = use_cart();
    let total = move || format_money(cart.total());

    let checkout = Callback::new(move |_: leptos::ev::MouseEvent| {
        log::info!(
            "Checkout requested for {} units, total {}",
            cart.item_count(),
            cart.total()
        );
        if let Some(win) = web_sys::window() {
            let _ = win.alert_with_message("Checkout is not available yet.");
        }
    });

    view! {
        <aside class="cart-summary">
            <h2 class="cart-summary__title">"Order Summary"</h2>
            <div class="cart-summary__row">
                <span>{move || format!("Subtotal ({})", items_label(cart.item_count()))}</span>
                <span>{total}</span>
            </div>
            <div class="cart-summary__row">
                <span>"Tax"</span>
                <span>"Calculated at checkout"</span>
            </div>
            <div class="cart-summary__row cart-summary__row--total">
                <span>"Total"</span>
                <span>{total}</span>
            </div>
            <Button size=ButtonSize::Lg full_width=true on_click=checkout>
                "Proceed to Checkout"
            </Button>
            <A href="/" attr:class="cart-summary__continue">"Continue Shopping"</A>
        </aside>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let is_empty = move || cart.state.with(|c| c.is_empty());

    view! {
        <PageFrame page_id="a102_cart--checkout" category=PAGE_CAT_CHECKOUT>
            <Show when=move || !is_empty() fallback=|| view! { <EmptyCart /> }>
                <PageHeader
                    title="Shopping Cart"
                    subtitle=Signal::derive(move || Some(items_label(cart.item_count())))
                    leading=view! { <A href="/" attr:class="page-header__back">{icon("arrow-left")}</A> }.into_any()
                >
                    <Button variant=ButtonVariant::Danger size=ButtonSize::Sm on_click=Callback::new(move |_| cart.clear_cart())>
                        "Clear Cart"
                    </Button>
                </PageHeader>
                <div class="page__content cart-layout">
                    <div class="cart-lines">
                        <For
                            each=move || cart.items()
                            key=|item| (item.id.clone(), item.quantity)
                            children=|item| view! { <CartLine item=item /> }
                        />
                    </div>
                    <OrderSummaryPanel />
                </div>
            </Show>
        </PageFrame>
    }
}
