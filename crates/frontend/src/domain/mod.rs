pub mod a101_product;
pub mod a102_cart;
pub mod a103_order;
