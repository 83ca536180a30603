pub mod aggregate;

pub use aggregate::{CartItem, CartState, NewCartItem};
