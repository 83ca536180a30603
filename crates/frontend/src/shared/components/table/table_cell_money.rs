//! Table cell for money amounts.
//!
//! ```ignore
//! <TableCellMoney value=Signal::derive(move || Some(order.total)) />
//! <TableCellMoney value=total bold=true color_by_sign=false />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;

fn sign_color(value: Decimal) -> Option<&'static str> {
    if value.is_zero() {
        None
    } else if value.is_sign_negative() {
        Some("color: var(--color-error-700)")
    } else {
        Some("color: var(--color-success-700)")
    }
}

/// Right-aligned `$1,234.50`; `None` renders a dash.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<Decimal>>,
    /// Positive amounts green, negative red
    #[prop(optional)]
    color_by_sign: bool,
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    let text = move || match value.get() {
        Some(v) => format_money(v),
        None => "\u{2014}".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            if let Some(color) = value.get().and_then(sign_color) {
                styles.push(color);
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{text}</span>
        </TableCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_color() {
        assert_eq!(sign_color(Decimal::ZERO), None);
        assert!(sign_color(Decimal::new(-5, 1)).unwrap().contains("error"));
        assert!(sign_color(Decimal::from(3)).unwrap().contains("success"));
    }
}
