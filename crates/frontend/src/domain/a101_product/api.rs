use contracts::domain::a101_product::Product;

use crate::shared::supabase::{ApiError, SupabaseClient};

const TABLE: &str = "products";

pub fn products_url(client: &SupabaseClient) -> String {
    client.rest_url(TABLE, &[("select", "*"), ("order", "created_at.desc")])
}

pub fn product_url(client: &SupabaseClient, id: &str) -> String {
    client.rest_url(TABLE, &[("select", "*"), ("id", &format!("eq.{}", id))])
}

/// Newest first.
pub async fn fetch_products(client: &SupabaseClient) -> Result<Vec<Product>, ApiError> {
    client.select(&products_url(client), None).await
}

/// `ApiError::NotFound` when no row has this id.
pub async fn fetch_product(client: &SupabaseClient, id: &str) -> Result<Product, ApiError> {
    client.select_single(&product_url(client, id), None).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_urls() {
        let client = SupabaseClient::new(
            AppConfig::from_values(Some("https://shop.supabase.co"), Some("anon")).unwrap(),
        );
        assert_eq!(
            products_url(&client),
            "https://shop.supabase.co/rest/v1/products?select=%2A&order=created_at.desc"
        );
        assert_eq!(
            product_url(&client, "42"),
            "https://shop.supabase.co/rest/v1/products?select=%2A&id=eq.42"
        );
    }
}
