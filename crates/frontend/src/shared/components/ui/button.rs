use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

/// Full class list for a button; empty modifiers are skipped.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Secondary => "button--secondary",
        ButtonVariant::Ghost => "button--ghost",
        ButtonVariant::Danger => "button--danger",
    };
    let size = match size {
        ButtonSize::Sm => "button--sm",
        ButtonSize::Md => "",
        ButtonSize::Lg => "button--lg",
    };
    let width = if full_width { "button--block" } else { "" };

    ["button", variant, size, width, extra]
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn Button(
    #[prop(optional)]
    variant: ButtonVariant,
    #[prop(optional)]
    size: ButtonSize,
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || button_class(variant, size, full_width, &class.get().unwrap_or_default())
            title=move || title.get()
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
