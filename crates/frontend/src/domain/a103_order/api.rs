use contracts::domain::a103_order::Order;

use crate::shared::supabase::{ApiError, SupabaseClient};

pub fn orders_url(client: &SupabaseClient) -> String {
    client.rest_url("orders", &[("select", "*"), ("order", "created_at.desc")])
}

/// All orders visible to the signed-in user, newest first. Row-level
/// security on the backend decides what an admin sees.
pub async fn fetch_orders(client: &SupabaseClient, access_token: &str) -> Result<Vec<Order>, ApiError> {
    client.select(&orders_url(client), Some(access_token)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_orders_url() {
        let client = SupabaseClient::new(
            AppConfig::from_values(Some("https://shop.supabase.co"), Some("anon")).unwrap(),
        );
        assert_eq!(
            orders_url(&client),
            "https://shop.supabase.co/rest/v1/orders?select=%2A&order=created_at.desc"
        );
    }
}
