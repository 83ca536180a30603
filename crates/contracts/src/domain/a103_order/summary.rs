use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::{Order, OrderStatus};

/// Period selector on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeWindow {
    #[default]
    Today,
    Weekly,
    Monthly,
    Yearly,
}

impl TimeWindow {
    pub fn all() -> [TimeWindow; 4] {
        [
            TimeWindow::Today,
            TimeWindow::Weekly,
            TimeWindow::Monthly,
            TimeWindow::Yearly,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeWindow::Today => "Today",
            TimeWindow::Weekly => "Weekly",
            TimeWindow::Monthly => "Monthly",
            TimeWindow::Yearly => "Yearly",
        }
    }

    pub fn duration(&self) -> Duration {
        match self {
            TimeWindow::Today => Duration::days(1),
            TimeWindow::Weekly => Duration::days(7),
            TimeWindow::Monthly => Duration::days(30),
            TimeWindow::Yearly => Duration::days(365),
        }
    }

    /// Orders created within the window ending at `now`. Orders with an
    /// unparsable timestamp never match.
    pub fn filter<'a>(&self, orders: &'a [Order], now: DateTime<Utc>) -> Vec<&'a Order> {
        let since = now - self.duration();
        orders
            .iter()
            .filter(|order| {
                order
                    .created_at_utc()
                    .is_some_and(|created| created > since && created <= now)
            })
            .collect()
    }
}

/// Aggregate figures for the admin stat cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub revenue: Decimal,
    pub order_count: usize,
    pub customer_count: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl OrderSummary {
    pub fn from_orders<'a, I>(orders: I) -> Self
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut summary = OrderSummary::default();
        let mut customers: HashSet<String> = HashSet::new();

        for order in orders {
            summary.order_count += 1;
            customers.insert(order.customer_email.to_lowercase());

            if !order.order_status.is_void() {
                summary.revenue += order.total;
            }

            match order.order_status {
                OrderStatus::Pending => summary.pending += 1,
                OrderStatus::Processing => summary.processing += 1,
                OrderStatus::Completed => summary.completed += 1,
                OrderStatus::Cancelled => summary.cancelled += 1,
                OrderStatus::Refunded => {}
            }
        }

        summary.customer_count = customers.len();
        summary
    }
}

/// Case-insensitive match on customer name, e-mail or order number. An empty
/// query keeps every order.
pub fn search_orders<'a>(orders: &[&'a Order], query: &str) -> Vec<&'a Order> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return orders.to_vec();
    }
    orders
        .iter()
        .copied()
        .filter(|order| {
            order.customer_name.to_lowercase().contains(&needle)
                || order.customer_email.to_lowercase().contains(&needle)
                || order.order_number.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(id: &str, name: &str, email: &str, total: &str, status: &str, created: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "order_number": format!("2023111713{}", id),
            "customer_email": email,
            "customer_name": name,
            "subtotal": total,
            "total": total,
            "order_status": status,
            "created_at": created,
        }))
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn sample() -> Vec<Order> {
        vec![
            order("1", "Alice", "alice@demo.com", "26.25", "cancelled", "2024-06-15T08:00:00+00:00"),
            order("2", "Bob", "bob@demo.com", "72.45", "completed", "2024-06-12T08:00:00+00:00"),
            order("3", "Alice", "ALICE@demo.com", "10.00", "pending", "2024-05-20T08:00:00+00:00"),
            order("4", "Carol", "carol@demo.com", "5.50", "processing", "2023-01-01T08:00:00+00:00"),
            order("5", "Dan", "dan@demo.com", "99.00", "refunded", "not a date"),
        ]
    }

    #[test]
    fn test_summary_counts_and_revenue() {
        let orders = sample();
        let summary = OrderSummary::from_orders(&orders);

        assert_eq!(summary.order_count, 5);
        assert_eq!(summary.customer_count, 4);
        assert_eq!(summary.revenue, Decimal::new(8795, 2));
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.processing, 1);
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.cancelled, 1);
    }

    #[test]
    fn test_time_windows() {
        let orders = sample();
        let ids = |window: TimeWindow| -> Vec<String> {
            window
                .filter(&orders, now())
                .into_iter()
                .map(|o| o.id.clone())
                .collect()
        };

        assert_eq!(ids(TimeWindow::Today), vec!["1"]);
        assert_eq!(ids(TimeWindow::Weekly), vec!["1", "2"]);
        assert_eq!(ids(TimeWindow::Monthly), vec!["1", "2", "3"]);
        assert_eq!(ids(TimeWindow::Yearly), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_search_orders() {
        let orders = sample();
        let all: Vec<&Order> = orders.iter().collect();

        assert_eq!(search_orders(&all, "").len(), 5);
        assert_eq!(search_orders(&all, "  alice ").len(), 2);
        assert_eq!(search_orders(&all, "carol@").len(), 1);
        assert_eq!(search_orders(&all, "20231117134").len(), 1);
        assert!(search_orders(&all, "zed").is_empty());
    }

    #[test]
    fn test_display_reference_prefers_tracking_number() {
        let mut o = order("1", "alice", "a@b.c", "1", "pending", "2024-06-15T08:00:00Z");
        assert_eq!(o.display_reference(), "20231117131");
        o.tracking_number = Some("TRK-1".to_string());
        assert_eq!(o.display_reference(), "TRK-1");
        assert_eq!(o.customer_initial(), 'A');
    }
}
