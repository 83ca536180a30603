pub mod aggregate;
pub mod category;
pub mod license;

pub use aggregate::{Product, ProductStatus};
pub use category::{filter_by_category, CATEGORIES, CATEGORY_ALL, CATEGORY_FREE};
pub use license::LicenseTier;
