pub mod badge;
pub mod page;

pub use badge::CartBadge;
pub use page::CartPage;
