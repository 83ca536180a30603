use leptos::prelude::*;

/// Centered loading indicator with an optional caption.
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner-container" role="status">
            <div class="spinner"></div>
            {label.map(|text| view! { <p class="spinner__label">{text}</p> })}
        </div>
    }
}
