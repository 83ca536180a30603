use contracts::domain::a103_order::OrderStatus;
use leptos::prelude::*;

/// Badge with colour variants: "primary", "success", "warning", "error", "neutral" (default).
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || variant_class(variant.get().as_deref().unwrap_or("neutral"));
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

pub fn order_status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "success",
        OrderStatus::Processing => "primary",
        OrderStatus::Pending => "warning",
        OrderStatus::Cancelled | OrderStatus::Refunded => "error",
    }
}

/// Coloured order status label.
#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=format!("badge badge--status {}", variant_class(order_status_variant(status)))>
            {status.display_name()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_variant() {
        assert_eq!(order_status_variant(OrderStatus::Completed), "success");
        assert_eq!(order_status_variant(OrderStatus::Pending), "warning");
        assert_eq!(order_status_variant(OrderStatus::Refunded), "error");
        assert_eq!(variant_class(order_status_variant(OrderStatus::Processing)), "badge--primary");
        assert_eq!(variant_class("bogus"), "badge--neutral");
    }
}
