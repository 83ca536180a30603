pub mod details;
pub mod list;

pub use details::ProductPage;
pub use list::HomePage;
