use super::aggregate::Product;

pub const CATEGORY_ALL: &str = "All";
pub const CATEGORY_FREE: &str = "Free";

/// Category chips shown above the product grid, in display order.
pub const CATEGORIES: [&str; 16] = [
    CATEGORY_ALL,
    CATEGORY_FREE,
    "PHP Script",
    "HTML",
    "React",
    "WordPress Plugin",
    "WordPress Theme",
    "Angular",
    "CMS",
    "Wireframe Kits",
    "UI templates",
    "Illustrations",
    "Icon Sets",
    "Mobile App",
    "3D Assets",
    "Bootstrap",
];

/// `All` keeps everything, `Free` keeps zero-priced products, anything else
/// matches `category` exactly.
pub fn filter_by_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| match category {
            CATEGORY_ALL => true,
            CATEGORY_FREE => product.is_free(),
            other => product.category == other,
        })
        .collect()
}
