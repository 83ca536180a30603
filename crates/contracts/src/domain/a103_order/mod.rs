pub mod aggregate;
pub mod summary;

pub use aggregate::{Order, OrderStatus, PaymentStatus};
pub use summary::{search_orders, OrderSummary, TimeWindow};
