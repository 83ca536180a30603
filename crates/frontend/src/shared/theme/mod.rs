//! Theme management module for the application.
//!
//! Provides a context-based light/dark theme. The preference is read once
//! when the provider mounts, written back on every change, and mirrored onto
//! the `<html>` element as a `light`/`dark` class (plus `data-theme` on
//! `<body>`) for the stylesheets.

use leptos::prelude::*;
use web_sys::window;

use crate::shared::storage::SharedStore;

pub const THEME_STORAGE_KEY: &str = "theme";

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for the CSS class and storage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn load_theme(store: &SharedStore) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Swap the root class and the body attribute.
fn apply_theme_marker(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
        let _ = classes.add_1(theme.as_str());
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme signal.
    pub theme: RwSignal<Theme>,
    store: StoredValue<SharedStore>,
}

impl ThemeContext {
    /// Reads the stored preference once; light when nothing usable is stored.
    pub fn new(store: SharedStore) -> Self {
        let initial = load_theme(&store);
        Self {
            theme: RwSignal::new(initial),
            store: StoredValue::new(store),
        }
    }

    /// Get the current theme.
    pub fn get_theme(&self) -> Theme {
        self.theme.get()
    }

    /// Set the theme and persist it.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        self.store
            .get_value()
            .set(THEME_STORAGE_KEY, theme.as_str());
    }

    /// Flip between light and dark.
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.set_theme(next);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(store: SharedStore, children: Children) -> impl IntoView {
    let context = ThemeContext::new(store);
    provide_context(context);

    // Keeps the root marker in sync, including the initial value.
    Effect::new(move |_| apply_theme_marker(context.theme.get()));

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark switch button.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();
    let is_dark = move || ctx.theme.get() == Theme::Dark;

    view! {
        <button
            class="top-header-icon-btn"
            on:click=move |_| ctx.toggle_theme()
            title=move || if is_dark() { "Switch to Light Mode" } else { "Switch to Dark Mode" }
        >
            {move || {
                if is_dark() {
                    crate::shared::icons::icon("sun")
                } else {
                    crate::shared::icons::icon("moon")
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light_and_toggle_persists() {
        let owner = Owner::new();
        owner.set();

        let store = MemoryStore::shared();
        let ctx = ThemeContext::new(store.clone());
        assert_eq!(ctx.theme.get_untracked(), Theme::Light);
        assert_eq!(store.get(THEME_STORAGE_KEY), None);

        ctx.toggle_theme();
        assert_eq!(ctx.theme.get_untracked(), Theme::Dark);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));

        ctx.toggle_theme();
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_reads_stored_preference() {
        let owner = Owner::new();
        owner.set();

        let store = MemoryStore::shared();
        store.set(THEME_STORAGE_KEY, "dark");
        let ctx = ThemeContext::new(store.clone());
        assert_eq!(ctx.theme.get_untracked(), Theme::Dark);

        ctx.set_theme(Theme::Dark);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_unknown_stored_value_falls_back_to_light() {
        let owner = Owner::new();
        owner.set();

        let store = MemoryStore::shared();
        store.set(THEME_STORAGE_KEY, "forest");
        assert_eq!(ThemeContext::new(store).theme.get_untracked(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("\"dark\""), None);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
