use contracts::domain::a101_product::Product;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::table::format_money;

/// Avatar colour for the author badge.
pub fn author_badge_class(author_icon: &str) -> &'static str {
    match author_icon {
        "i" | "Q" => "author-badge author-badge--green",
        "M" => "author-badge author-badge--purple",
        _ => "author-badge author-badge--yellow",
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);
    let price = if product.has_discount() {
        let original = product.original_price.map(format_money).unwrap_or_default();
        view! {
            <span class="price">{format_money(product.price)}</span>
            <span class="price price--original">{original}</span>
        }
        .into_any()
    } else {
        view! { <span class="price">{product.price_label()}</span> }.into_any()
    };

    let image_url = product.image_url.clone();
    let image_alt = product.name.clone();
    view! {
        <div class="card product-card">
            <A href=href.clone() attr:class="product-card__media">
                <img src=image_url alt=image_alt loading="lazy" />
            </A>
            <div class="product-card__body">
                <h3 class="product-card__title">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <div class="product-card__author">
                    <span class=author_badge_class(&product.author_icon)>
                        {product.author_icon.clone()}
                    </span>
                    <span>{product.author.clone()}</span>
                </div>
                <div class="product-card__footer">
                    <div class="product-card__price">{price}</div>
                    <A href=href attr:class="button button--primary button--sm">"View Details"</A>
                </div>
            </div>
        </div>
    }
}
