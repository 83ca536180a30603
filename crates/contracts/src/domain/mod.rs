pub mod a101_product;
pub mod a102_cart;
pub mod a103_order;
pub mod a104_user_profile;
