pub mod context;
pub mod ui;

pub use context::{use_cart, CartContext, CartProvider, CART_STORAGE_KEY};
