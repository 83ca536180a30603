mod card;
mod category_filter;

pub use card::ProductCard;
pub use category_filter::CategoryFilter;

use contracts::domain::a101_product::{filter_by_category, Product, CATEGORY_ALL};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a101_product::api::fetch_products;
use crate::shared::components::ui::Spinner;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_CATALOG};
use crate::shared::supabase::use_supabase;

/// Catalogue page: category chips over the product grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let client = StoredValue::new(use_supabase());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (category, set_category) = signal(CATEGORY_ALL.to_string());

    let fetch = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let client = client.get_value();
            match fetch_products(&client).await {
                Ok(v) => {
                    log::debug!("Loaded {} products", v.len());
                    set_products.set(v);
                }
                Err(e) => {
                    log::warn!("Failed to load products: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    let visible = move || {
        let selected = category.get();
        products.with(|all| {
            filter_by_category(all, &selected)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id="a101_product--catalog" category=PAGE_CAT_CATALOG>
            <div class="page__content">
                <CategoryFilter
                    selected=category
                    on_change=Callback::new(move |c| set_category.set(c))
                />
                {move || {
                    if loading.get() {
                        return view! { <Spinner label="Loading products..." /> }.into_any();
                    }
                    if let Some(e) = error.get() {
                        return view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">{e}</span>
                                <button class="button button--secondary" on:click=move |_| fetch()>
                                    "Try again"
                                </button>
                            </div>
                        }
                        .into_any();
                    }
                    let items = visible();
                    if items.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"No products found in this category."</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="product-grid">
                            {items
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </PageFrame>
    }
}
