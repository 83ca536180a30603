//! Shopping cart context.
//!
//! The single source of truth for the cart. Components subscribe through the
//! `state` signal; every mutation goes through a command method and is
//! written to storage before the method returns.

use contracts::domain::a102_cart::{CartItem, CartState, NewCartItem};
use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::shared::storage::SharedStore;

pub const CART_STORAGE_KEY: &str = "cart";

fn load_cart(store: &SharedStore) -> CartState {
    let Some(raw) = store.get(CART_STORAGE_KEY) else {
        return CartState::new();
    };
    match CartState::from_json(&raw) {
        Ok(cart) => cart,
        Err(e) => {
            log::warn!("Ignoring malformed stored cart: {}", e);
            CartState::new()
        }
    }
}

#[derive(Clone, Copy)]
pub struct CartContext {
    pub state: RwSignal<CartState>,
    store: StoredValue<SharedStore>,
}

impl CartContext {
    /// Hydrates from storage; a missing or unreadable entry yields an empty cart.
    pub fn new(store: SharedStore) -> Self {
        let initial = load_cart(&store);
        Self {
            state: RwSignal::new(initial),
            store: StoredValue::new(store),
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut CartState)) {
        self.state.update(f);
        self.persist();
    }

    fn persist(&self) {
        match self.state.with_untracked(CartState::to_json) {
            Ok(raw) => self.store.get_value().set(CART_STORAGE_KEY, &raw),
            Err(e) => log::warn!("Failed to serialize cart: {}", e),
        }
    }

    pub fn add_item(&self, item: NewCartItem) {
        self.mutate(|cart| cart.add_item(item));
    }

    pub fn remove_item(&self, id: &str) {
        self.mutate(|cart| cart.remove_item(id));
    }

    pub fn update_quantity(&self, id: &str, quantity: i64) {
        self.mutate(|cart| cart.update_quantity(id, quantity));
    }

    pub fn clear_cart(&self) {
        self.mutate(CartState::clear);
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        self.state.with(|cart| cart.is_in_cart(id))
    }

    pub fn get_item_quantity(&self, id: &str) -> u32 {
        self.state.with(|cart| cart.get_item_quantity(id))
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.state.with(|cart| cart.items().to_vec())
    }

    pub fn total(&self) -> Decimal {
        self.state.with(CartState::total)
    }

    pub fn item_count(&self) -> u32 {
        self.state.with(CartState::item_count)
    }
}

/// Provides the cart context to children components.
#[component]
pub fn CartProvider(store: SharedStore, children: Children) -> impl IntoView {
    provide_context(CartContext::new(store));
    children()
}

/// Hook to access the cart.
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartProvider not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStore;

    fn item(id: &str, price: i64) -> NewCartItem {
        NewCartItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Decimal::from(price),
            original_price: None,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let owner = Owner::new();
        owner.set();

        let store = MemoryStore::shared();
        let cart = CartContext::new(store.clone());
        assert_eq!(store.get(CART_STORAGE_KEY), None);

        cart.add_item(item("p1", 10));
        cart.add_item(item("p1", 10));
        cart.add_item(item("p2", 5));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Decimal::from(25));

        let reloaded = CartContext::new(store.clone());
        assert_eq!(reloaded.get_item_quantity("p1"), 2);
        assert_eq!(reloaded.items().len(), 2);

        cart.update_quantity("p1", 0);
        assert!(!CartContext::new(store.clone()).is_in_cart("p1"));

        cart.clear_cart();
        let reloaded = CartContext::new(store);
        assert_eq!(reloaded.item_count(), 0);
        assert!(!reloaded.is_in_cart("p2"));
    }

    #[test]
    fn test_malformed_storage_starts_empty() {
        let owner = Owner::new();
        owner.set();

        let store = MemoryStore::shared();
        store.set(CART_STORAGE_KEY, "{not json");
        let cart = CartContext::new(store.clone());
        assert_eq!(cart.item_count(), 0);

        cart.add_item(item("p9", 3));
        assert_eq!(CartContext::new(store).get_item_quantity("p9"), 1);
    }

    #[test]
    fn test_remove_absent_keeps_items() {
        let owner = Owner::new();
        owner.set();

        let cart = CartContext::new(MemoryStore::shared());
        cart.add_item(item("p1", 10));
        cart.remove_item("nope");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get_item_quantity("nope"), 0);
    }
}
