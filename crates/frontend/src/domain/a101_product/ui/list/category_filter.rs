use contracts::domain::a101_product::CATEGORIES;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Horizontal row of category chips; the selected one is highlighted.
#[component]
pub fn CategoryFilter(
    #[prop(into)]
    selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="category-filter">
            {CATEGORIES
                .iter()
                .map(|&category| {
                    let is_active = move || selected.get() == category;
                    view! {
                        <button
                            class=move || {
                                if is_active() { "chip chip--active" } else { "chip" }
                            }
                            on:click=move |_| on_change.run(category.to_string())
                        >
                            {category}
                        </button>
                    }
                })
                .collect_view()}
            <span class="category-filter__more">{icon("chevron-right")}</span>
        </div>
    }
}
