use chrono::Utc;
use contracts::domain::a103_order::{search_orders, Order, OrderSummary, TimeWindow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a101_product::api::fetch_products;
use crate::domain::a103_order::api::fetch_orders;
use crate::shared::components::table::{format_money, format_number_int, TableCellMoney};
use crate::shared::components::ui::{Button, ButtonVariant, OrderStatusBadge, Spinner};
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::shared::supabase::use_supabase;
use crate::system::auth::use_auth;

const RECENT_ORDERS_LIMIT: usize = 20;

/// Orders matching `query`, newest first as delivered, capped at `limit`.
fn recent_orders(orders: &[Order], query: &str, limit: usize) -> Vec<Order> {
    let all: Vec<&Order> = orders.iter().collect();
    search_orders(&all, query)
        .into_iter()
        .take(limit)
        .cloned()
        .collect()
}

#[component]
fn OrdersTable(#[prop(into)] orders: Signal<Vec<Order>>, #[prop(into)] query: Signal<String>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Tracking Number"</TableHeaderCell>
                    <TableHeaderCell>"Customer"</TableHeaderCell>
                    <TableHeaderCell>"Order Date"</TableHeaderCell>
                    <TableHeaderCell attr:class="text-right">"Total"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let filter = query.get();
                    orders
                        .get()
                        .into_iter()
                        .map(|order| {
                            let total = order.total;
                            let reference_view = highlight_matches(order.display_reference(), &filter);
                            let name_view = highlight_matches(&order.customer_name, &filter);
                            let email_view = highlight_matches(&order.customer_email, &filter);
                            let initial = order.customer_initial().to_string();
                            view! {
                                <TableRow>
                                    <TableCell>{reference_view}</TableCell>
                                    <TableCell>
                                        <div class="customer-cell">
                                            <span class="customer-cell__avatar">{initial}</span>
                                            <div>
                                                <div>{name_view}</div>
                                                <div class="muted">{email_view}</div>
                                            </div>
                                        </div>
                                    </TableCell>
                                    <TableCell>{format_datetime(&order.created_at)}</TableCell>
                                    <TableCellMoney value=Signal::derive(move || Some(total)) />
                                    <TableCell><OrderStatusBadge status=order.order_status /></TableCell>
                                </TableRow>
                            }
                        })
                        .collect_view()
                }}
            </TableBody>
        </Table>
    }
}

/// `/admin`: revenue and order figures plus a searchable order list.
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let client = StoredValue::new(use_supabase());
    let auth = use_auth();

    let orders = RwSignal::new(Vec::<Order>::new());
    let product_count = RwSignal::new(None::<usize>);
    let loading = RwSignal::new(true);
    let error_msg = RwSignal::new(None::<String>);
    let window = RwSignal::new(TimeWindow::default());
    let query = RwSignal::new(String::new());

    let load = move || {
        let token = auth
            .state
            .with_untracked(|s| s.session.as_ref().map(|s| s.access_token.clone()));
        let Some(token) = token else {
            error_msg.set(Some("Session expired. Sign in again.".to_string()));
            loading.set(false);
            return;
        };
        loading.set(true);
        error_msg.set(None);
        spawn_local(async move {
            let client = client.get_value();
            match fetch_orders(&client, &token).await {
                Ok(rows) => {
                    log::debug!("Admin dashboard loaded {} orders", rows.len());
                    orders.set(rows);
                }
                Err(e) => {
                    log::warn!("Failed to load orders: {}", e);
                    error_msg.set(Some(e.to_string()));
                }
            }
            match fetch_products(&client).await {
                Ok(rows) => product_count.set(Some(rows.len())),
                Err(e) => log::warn!("Failed to count products: {}", e),
            }
            loading.set(false);
        });
    };

    load();

    let summary = Memo::new(move |_| orders.with(|all| OrderSummary::from_orders(all)));
    let window_summary = Memo::new(move |_| {
        let selected = window.get();
        orders.with(|all| OrderSummary::from_orders(selected.filter(all, Utc::now())))
    });
    let visible = Signal::derive(move || {
        let q = query.get();
        orders.with(|all| recent_orders(all, &q, RECENT_ORDERS_LIMIT))
    });

    let count = |n: usize| Some(format_number_int(n));

    view! {
        <PageFrame page_id="d101_admin--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle="Orders, revenue and customers">
                <Button variant=ButtonVariant::Secondary on_click=Callback::new(move |_| load())>"Refresh"</Button>
            </PageHeader>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner label="Loading orders..." /> }>
                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"Summary"</h2>
                    <div class="stat-grid">
                        <StatCard
                            label="Total Revenue"
                            icon_name="revenue"
                            value=Signal::derive(move || Some(format_money(summary.get().revenue)))
                            tone=StatTone::Success
                        />
                        <StatCard
                            label="Total Orders"
                            icon_name="orders"
                            value=Signal::derive(move || count(summary.get().order_count))
                        />
                        <StatCard
                            label="Customers"
                            icon_name="customers"
                            value=Signal::derive(move || count(summary.get().customer_count))
                        />
                        <StatCard
                            label="Products"
                            icon_name="products"
                            value=Signal::derive(move || product_count.get().map(format_number_int))
                        />
                    </div>
                </section>

                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"Order Status"</h2>
                    <div class="button-row">
                        {TimeWindow::all()
                            .into_iter()
                            .map(|w| view! {
                                <button
                                    class=move || if window.get() == w { "chip chip--active" } else { "chip" }
                                    on:click=move |_| window.set(w)
                                >
                                    {w.display_name()}
                                </button>
                            })
                            .collect_view()}
                    </div>
                    <div class="stat-grid">
                        <StatCard
                            label="Pending Orders"
                            icon_name="orders"
                            value=Signal::derive(move || count(window_summary.get().pending))
                            tone=StatTone::Warning
                        />
                        <StatCard
                            label="Processing Orders"
                            icon_name="orders"
                            value=Signal::derive(move || count(window_summary.get().processing))
                        />
                        <StatCard
                            label="Completed Orders"
                            icon_name="orders"
                            value=Signal::derive(move || count(window_summary.get().completed))
                            tone=StatTone::Success
                        />
                        <StatCard
                            label="Cancelled Orders"
                            icon_name="orders"
                            value=Signal::derive(move || count(window_summary.get().cancelled))
                            tone=StatTone::Error
                        />
                    </div>
                </section>

                <section class="dashboard-section card">
                    <div class="dashboard-section__header">
                        <h2 class="dashboard-section__title">"Recent Orders"</h2>
                        <SearchInput
                            placeholder="Search by name, email or order number"
                            on_change=Callback::new(move |q: String| query.set(q))
                        />
                    </div>
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-state">"No orders found."</p> }
                    >
                        <OrdersTable orders=visible query=query />
                    </Show>
                </section>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, name: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "order_number": format!("ORD-{}", id),
            "customer_email": format!("{}@demo.com", name.to_lowercase()),
            "customer_name": name,
            "subtotal": "10.00",
            "total": "10.00",
            "order_status": "pending",
            "created_at": "2024-06-15T08:00:00Z",
        }))
        .unwrap()
    }

    #[test]
    fn test_recent_orders_filters_and_caps() {
        let orders = vec![order("1", "Alice"), order("2", "Bob"), order("3", "Alicia")];

        let ids = |q: &str, limit: usize| -> Vec<String> {
            recent_orders(&orders, q, limit).into_iter().map(|o| o.id).collect()
        };

        assert_eq!(ids("", 10), vec!["1", "2", "3"]);
        assert_eq!(ids("ali", 10), vec!["1", "3"]);
        assert_eq!(ids("", 2), vec!["1", "2"]);
        assert_eq!(ids("ord-2", 10), vec!["2"]);
    }
}
