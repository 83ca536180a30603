use leptos::prelude::*;

/// Chrome state shared by the header and the sidebar.
#[derive(Clone, Copy)]
pub struct LayoutContext {
    pub sidebar_open: RwSignal<bool>,
}

impl LayoutContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Narrow screens close the drawer after navigating.
    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_layout() -> LayoutContext {
    use_context::<LayoutContext>().expect("LayoutContext not found. Render inside Shell.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sidebar() {
        let owner = Owner::new();
        owner.set();

        let ctx = LayoutContext::new();
        assert!(ctx.sidebar_open.get_untracked());
        ctx.toggle_sidebar();
        assert!(!ctx.sidebar_open.get_untracked());
        ctx.toggle_sidebar();
        ctx.close_sidebar();
        assert!(!ctx.sidebar_open.get_untracked());
    }
}
