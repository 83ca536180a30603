use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Line item
// ============================================================================

/// Payload accepted by [`CartState::add_item`]. Quantity is owned by the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub image_url: String,
    pub quantity: u32,
}

impl CartItem {
    fn from_new(item: NewCartItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            original_price: item.original_price,
            image_url: item.image_url,
            quantity: 1,
        }
    }

    /// `price × quantity`
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Shopping cart contents. Only `items` is stored, as a bare JSON array;
/// totals are derived on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<CartItem>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from arbitrary entries, restoring the invariants:
    /// zero-quantity entries are dropped and duplicate ids are merged into the
    /// first occurrence.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match merged.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity)
                }
                None => merged.push(item),
            }
        }
        Self { items: merged }
    }

    /// Parses a persisted cart. Callers decide what to do with a malformed value.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let items: Vec<CartItem> = serde_json::from_str(raw)?;
        Ok(Self::from_items(items))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `price × quantity` over all entries.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all entries.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Increments the quantity of an existing entry (display fields are kept
    /// from the first add) or appends a new entry with quantity 1.
    pub fn add_item(&mut self, item: NewCartItem) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(CartItem::from_new(item)),
        }
    }

    /// Removes the entry with `id`. Absent ids are ignored.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Sets the quantity of an entry. A quantity of zero or below removes it.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_in_cart(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Quantity of the entry with `id`, or 0 when absent.
    pub fn get_item_quantity(&self, id: &str) -> u32 {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map_or(0, |item| item.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(id: &str, price: i64) -> NewCartItem {
        NewCartItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Decimal::from(price),
            original_price: None,
            image_url: format!("https://picsum.photos/400/300?random={}", id),
        }
    }

    #[test]
    fn test_repeated_add_increments_single_entry() {
        let mut cart = CartState::new();
        for _ in 0..5 {
            cart.add_item(new_item("p1", 10));
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get_item_quantity("p1"), 5);
    }

    #[test]
    fn test_add_keeps_first_display_fields() {
        let mut cart = CartState::new();
        cart.add_item(new_item("p1", 10));
        let mut renamed = new_item("p1", 99);
        renamed.name = "Renamed".to_string();
        cart.add_item(renamed);

        let item = &cart.items()[0];
        assert_eq!(item.name, "Product p1");
        assert_eq!(item.price, Decimal::from(10));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_totals_scenario() {
        let mut cart = CartState::new();
        cart.add_item(new_item("p1", 10));
        cart.add_item(new_item("p1", 10));
        cart.add_item(new_item("p2", 5));

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.get_item_quantity("p1"), 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Decimal::from(25));
    }

    #[test]
    fn test_totals_follow_every_mutation() {
        let mut cart = CartState::new();
        cart.add_item(new_item("a", 3));
        cart.add_item(new_item("b", 7));
        cart.update_quantity("a", 4);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Decimal::from(19));

        cart.remove_item("b");
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total(), Decimal::from(12));
    }

    #[test]
    fn test_decimal_prices_do_not_drift() {
        let mut cart = CartState::new();
        let mut item = new_item("ui-kit", 0);
        item.price = Decimal::new(799, 2);
        cart.add_item(item);
        cart.update_quantity("ui-kit", 3);
        assert_eq!(cart.total(), Decimal::new(2397, 2));
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        for quantity in [0, -1] {
            let mut updated = CartState::new();
            updated.add_item(new_item("p1", 10));
            updated.add_item(new_item("p2", 5));
            updated.update_quantity("p1", quantity);

            let mut removed = CartState::new();
            removed.add_item(new_item("p1", 10));
            removed.add_item(new_item("p2", 5));
            removed.remove_item("p1");

            assert_eq!(updated, removed);
            assert!(!updated.is_in_cart("p1"));
        }
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = CartState::new();
        cart.add_item(new_item("p1", 10));
        cart.update_quantity("missing", 3);
        assert_eq!(cart.items().len(), 1);
        assert!(!cart.is_in_cart("missing"));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartState::new();
        cart.add_item(new_item("p1", 10));
        let before = cart.clone();
        cart.remove_item("missing");
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_resets_queries() {
        let mut cart = CartState::new();
        cart.add_item(new_item("p1", 10));
        cart.add_item(new_item("p2", 5));
        cart.clear();

        assert!(cart.is_empty());
        for id in ["p1", "p2", "p3"] {
            assert!(!cart.is_in_cart(id));
            assert_eq!(cart.get_item_quantity(id), 0);
        }
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = CartState::new();
        cart.add_item(new_item("c", 1));
        cart.add_item(new_item("a", 1));
        cart.add_item(new_item("b", 1));
        cart.add_item(new_item("a", 1));
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_persisted_form_survives_reload() {
        let mut cart = CartState::new();
        let mut item = new_item("p1", 59);
        item.original_price = Some(Decimal::from(65));
        cart.add_item(item);
        cart.add_item(new_item("p1", 59));

        let raw = cart.to_json().unwrap();
        assert!(raw.starts_with(r#"[{"id":"p1""#));
        let restored = CartState::from_json(&raw).unwrap();
        assert_eq!(restored, cart);
        assert!(restored.items()[0].has_discount());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CartState::from_json("not json").is_err());
        assert!(CartState::from_json(r#"{"items": []}"#).is_err());
        assert!(CartState::from_json("5").is_err());
    }

    #[test]
    fn test_from_json_restores_invariants() {
        let raw = r#"[
            {"id":"p1","name":"One","price":"10","image_url":"a","quantity":2},
            {"id":"p2","name":"Two","price":"5","image_url":"b","quantity":0},
            {"id":"p1","name":"Dup","price":"99","image_url":"c","quantity":1}
        ]"#;
        let cart = CartState::from_json(raw).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].name, "One");
        assert_eq!(cart.get_item_quantity("p1"), 3);
    }

    #[test]
    fn test_stored_array_hydrates() {
        let raw = r#"[{"id":"p1","name":"Theme","price":59.99,"original_price":79.99,"image_url":"t.png","quantity":2}]"#;
        let cart = CartState::from_json(raw).unwrap();
        assert_eq!(cart.get_item_quantity("p1"), 2);
        assert_eq!(cart.total(), Decimal::new(11998, 2));
        assert!(cart.items()[0].has_discount());
        assert_eq!(CartState::from_json("[]").unwrap(), CartState::new());
    }
}
