use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::a102_cart::NewCartItem;
use crate::shared::serde_helpers::null_as_default;

/// Publication status of a product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
    Draft,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
            ProductStatus::Draft => "draft",
        }
    }
}

/// Row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub original_price: Option<Decimal>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default)]
    pub gallery_images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_icon: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub changelog: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub download_count: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ProductStatus,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
}

impl Product {
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|orig| orig > self.price)
    }

    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }

    /// Price as shown on cards: `FREE` or `$59.00`.
    pub fn price_label(&self) -> String {
        if self.is_free() {
            "FREE".to_string()
        } else {
            format!("${:.2}", self.price)
        }
    }

    /// Main image followed by the gallery, without duplicates.
    pub fn images(&self) -> Vec<String> {
        let mut images = Vec::new();
        if !self.image_url.is_empty() {
            images.push(self.image_url.clone());
        }
        for url in self.gallery_images.iter().flatten() {
            if !images.contains(url) {
                images.push(url.clone());
            }
        }
        images
    }

    pub fn to_cart_item(&self) -> NewCartItem {
        NewCartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image_url: self.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{
        "id": "1",
        "name": "Temprador WooCommerce Template",
        "description": "Great software is built with amazing developers",
        "price": 59.00,
        "original_price": 65.00,
        "image_url": "https://picsum.photos/400/300?random=1",
        "gallery_images": ["https://picsum.photos/400/300?random=1", "https://picsum.photos/600/400?random=2"],
        "category": "WordPress Theme",
        "author": "REDQ",
        "author_icon": "i",
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;

    #[test]
    fn test_parse_rest_row() {
        let product: Product = serde_json::from_str(ROW).unwrap();
        assert_eq!(product.price, Decimal::from(59));
        assert_eq!(product.original_price, Some(Decimal::from(65)));
        assert_eq!(product.status, ProductStatus::Active);
        assert!(product.has_discount());
        assert!(product.sku.is_none());
    }

    #[test]
    fn test_price_label() {
        let mut product: Product = serde_json::from_str(ROW).unwrap();
        assert_eq!(product.price_label(), "$59.00");
        product.price = Decimal::ZERO;
        assert_eq!(product.price_label(), "FREE");
    }

    #[test]
    fn test_images_deduplicated() {
        let product: Product = serde_json::from_str(ROW).unwrap();
        assert_eq!(
            product.images(),
            vec![
                "https://picsum.photos/400/300?random=1".to_string(),
                "https://picsum.photos/600/400?random=2".to_string(),
            ]
        );
    }

    #[test]
    fn test_to_cart_item_carries_display_fields() {
        let product: Product = serde_json::from_str(ROW).unwrap();
        let item = product.to_cart_item();
        assert_eq!(item.id, "1");
        assert_eq!(item.price, Decimal::from(59));
        assert_eq!(item.original_price, Some(Decimal::from(65)));
    }

    #[test]
    fn test_null_text_columns_decode_empty() {
        let row = r#"{
            "id": "7",
            "name": "Bare listing",
            "description": null,
            "price": "12.50",
            "image_url": null,
            "category": null,
            "author": null,
            "author_icon": null,
            "status": null,
            "created_at": null,
            "updated_at": null
        }"#;
        let product: Product = serde_json::from_str(row).unwrap();
        assert_eq!(product.price, Decimal::new(1250, 2));
        assert!(product.description.is_empty());
        assert!(product.image_url.is_empty());
        assert!(product.category.is_empty());
        assert!(product.author.is_empty());
        assert!(product.created_at.is_empty());
        assert_eq!(product.status, ProductStatus::default());
        assert!(product.images().is_empty());
    }
}
