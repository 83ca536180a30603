use contracts::domain::a101_product::{LicenseTier, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::domain::a101_product::api::fetch_product;
use crate::domain::a102_cart::use_cart;
use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::components::ui::Spinner;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::shared::supabase::use_supabase;
use crate::shared::theme::ThemeToggle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailTab {
    Description,
    Features,
    Requirements,
    Changelog,
}

impl DetailTab {
    const ALL: [DetailTab; 4] = [
        DetailTab::Description,
        DetailTab::Features,
        DetailTab::Requirements,
        DetailTab::Changelog,
    ];

    fn label(&self) -> &'static str {
        match self {
            DetailTab::Description => "Description",
            DetailTab::Features => "Features",
            DetailTab::Requirements => "Requirements",
            DetailTab::Changelog => "Changelog",
        }
    }
}

/// Whole stars for a 0..=5 rating, rounded to nearest.
fn filled_stars(rating: f64) -> usize {
    rating.clamp(0.0, 5.0).round() as usize
}

fn add_button_label(in_cart: u32) -> String {
    if in_cart == 0 {
        "Add to Cart".to_string()
    } else {
        format!("Add Another ({} in cart)", in_cart)
    }
}

#[component]
fn Gallery(images: Vec<String>, name: String) -> impl IntoView {
    let selected = RwSignal::new(0usize);
    let images = StoredValue::new(images);
    let main_image = move || {
        images.with_value(|all| all.get(selected.get()).cloned().unwrap_or_default())
    };
    let count = images.with_value(Vec::len);

    view! {
        <div class="gallery">
            <div class="gallery__main">
                <img src=main_image alt=name />
            </div>
            <Show when=move || { count > 1 }>
                <div class="gallery__thumbs">
                    {images
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(i, url)| view! {
                            <button
                                class=move || {
                                    if selected.get() == i { "gallery__thumb gallery__thumb--active" } else { "gallery__thumb" }
                                }
                                on:click=move |_| selected.set(i)
                            >
                                <img src=url alt="" />
                            </button>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn LicenseSelector(base_price: rust_decimal::Decimal, selected: RwSignal<LicenseTier>) -> impl IntoView {
    view! {
        <div class="license-selector">
            {LicenseTier::all()
                .into_iter()
                .map(|tier| view! {
                    <label class=move || {
                        if selected.get() == tier { "license-option license-option--active" } else { "license-option" }
                    }>
                        <input
                            type="radio"
                            name="license"
                            value=tier.code()
                            prop:checked=move || selected.get() == tier
                            on:change=move |_| selected.set(tier)
                        />
                        <div class="license-option__text">
                            <span class="license-option__name">{tier.display_name()}</span>
                            <span class="license-option__description">{tier.description()}</span>
                        </div>
                        <span class="license-option__price">{format_money(tier.price_for(base_price))}</span>
                    </label>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProductTabs(product: Product) -> impl IntoView {
    let active = RwSignal::new(DetailTab::Description);
    let product = StoredValue::new(product);

    let body = move || {
        product.with_value(|p| match active.get() {
            DetailTab::Description => view! { <p class="prose">{p.description.clone()}</p> }.into_any(),
            DetailTab::Features => {
                let features = p.features.clone().unwrap_or_default();
                if features.is_empty() {
                    view! { <p class="muted">"No features listed."</p> }.into_any()
                } else {
                    view! {
                        <ul class="feature-list">
                            {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                        </ul>
                    }
                    .into_any()
                }
            }
            DetailTab::Requirements => {
                let text = p.requirements.clone().unwrap_or_else(|| "No special requirements.".to_string());
                view! { <p class="prose">{text}</p> }.into_any()
            }
            DetailTab::Changelog => {
                let text = p.changelog.clone().unwrap_or_else(|| "No changelog yet.".to_string());
                view! { <pre class="changelog">{text}</pre> }.into_any()
            }
        })
    };

    view! {
        <div class="tabs">
            <nav class="tabs__nav">
                {DetailTab::ALL
                    .into_iter()
                    .map(|tab| view! {
                        <button
                            class=move || if active.get() == tab { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                            on:click=move |_| active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    })
                    .collect_view()}
            </nav>
            <div class="tabs__body">{body}</div>
        </div>
    }
}

#[component]
fn ProductDetails(product: Product) -> impl IntoView {
    let cart = use_cart();
    let license = RwSignal::new(LicenseTier::default());
    let product_id = StoredValue::new(product.id.clone());
    let cart_item = StoredValue::new(product.to_cart_item());

    let in_cart = move || cart.state.with(|c| c.get_item_quantity(&product_id.read_value()));
    let add_to_cart = move |_| {
        cart.add_item(cart_item.get_value());
        log::debug!("Added {} to cart ({})", product_id.read_value(), license.get_untracked().code());
    };

    let base_price = product.price;
    let original = product
        .has_discount()
        .then(|| product.original_price.map(format_money))
        .flatten();
    let rating = product.rating.map(|r| {
        let stars = filled_stars(r);
        let reviews = product.review_count.unwrap_or(0);
        view! {
            <div class="rating">
                {(0..5)
                    .map(|i| {
                        let class = if i < stars { "rating__star rating__star--on" } else { "rating__star" };
                        view! { <span class=class>{icon("star")}</span> }
                    })
                    .collect_view()}
                <span class="rating__text">{format!("{:.1} ({} reviews)", r, reviews)}</span>
            </div>
        }
    });
    let downloads = product
        .download_count
        .map(|d| format!("{} downloads", format_number_int(d.max(0) as usize)));

    view! {
        <div class="product-detail">
            <Gallery images=product.images() name=product.name.clone() />
            <div class="product-detail__info">
                <span class="product-detail__category">{product.category.clone()}</span>
                <h1 class="product-detail__title">{product.name.clone()}</h1>
                <div class="product-detail__author">
                    {icon("user")}
                    <span>{product.author.clone()}</span>
                </div>
                {rating}
                {downloads.map(|d| view! { <div class="muted">{d}</div> })}
                <div class="product-detail__price">
                    <span class="price price--large">{product.price_label()}</span>
                    {original.map(|o| view! { <span class="price price--original">{o}</span> })}
                </div>
                <h3>"Select License"</h3>
                <LicenseSelector base_price=base_price selected=license />
                <div class="product-detail__selected-price">
                    "Total: "
                    {move || format_money(license.get().price_for(base_price))}
                </div>
                <button class="button button--primary button--lg button--block" on:click=add_to_cart>
                    {icon("cart")}
                    {move || add_button_label(in_cart())}
                </button>
                <dl class="product-meta">
                    {product.version.clone().map(|v| view! { <dt>"Version"</dt><dd>{v}</dd> })}
                    {product.sku.clone().map(|v| view! { <dt>"SKU"</dt><dd>{v}</dd> })}
                    {product.file_size.clone().map(|v| view! { <dt>"File size"</dt><dd>{v}</dd> })}
                    {(!product.updated_at.is_empty()).then(|| {
                        let updated = format_date(&product.updated_at);
                        view! { <dt>"Last update"</dt><dd>{updated}</dd> }
                    })}
                </dl>
                <div class="product-detail__links">
                    {product.demo_url.clone().map(|url| view! {
                        <a class="button button--secondary" href=url target="_blank" rel="noopener">
                            {icon("eye")}
                            "Live Preview"
                        </a>
                    })}
                    {product.documentation_url.clone().map(|url| view! {
                        <a class="button button--ghost" href=url target="_blank" rel="noopener">"Documentation"</a>
                    })}
                </div>
            </div>
        </div>
        <ProductTabs product=product />
    }
}

/// `/product/:id`
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let client = StoredValue::new(use_supabase());
    let (product, set_product) = signal::<Option<Product>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let id = move || params.with(|p| p.get("id")).unwrap_or_default();

    Effect::new(move |_| {
        let id = id();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = client.get_value();
            match fetch_product(&client, &id).await {
                Ok(p) => set_product.set(Some(p)),
                Err(e) if e.is_not_found() => {
                    set_product.set(None);
                    set_error.set(Some("Product not found.".to_string()));
                }
                Err(e) => {
                    log::warn!("Failed to load product {}: {}", id, e);
                    set_product.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id="a101_product--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header header">
                <div class="header__content">
                    <A href="/" attr:class="header__back">{icon("arrow-left")}</A>
                </div>
                <div class="header__actions">
                    <ThemeToggle />
                </div>
            </div>
            <div class="page__content">
                {move || {
                    if loading.get() {
                        return view! { <Spinner label="Loading product..." /> }.into_any();
                    }
                    if let Some(e) = error.get() {
                        return view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">{e}</span>
                                <A href="/" attr:class="button button--secondary">"Back to catalogue"</A>
                            </div>
                        }
                        .into_any();
                    }
                    match product.get() {
                        Some(p) => view! { <ProductDetails product=p /> }.into_any(),
                        None => view! { <div></div> }.into_any(),
                    }
                }}
            </div>
        </PageFrame>
    }
}
