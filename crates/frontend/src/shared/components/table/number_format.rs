//! Number formatting helpers for prices and tables.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a decimal with a thousands separator (comma) and a fixed number of
/// fraction digits, rounding half away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use storefront::shared::components::table::format_number_with_decimals;
///
/// let formatted = format_number_with_decimals(Decimal::new(1234567, 3), 2);
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: Decimal, decimals: u32) -> String {
    let rounded = value
        .abs()
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.prec$}", rounded, prec = decimals as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    // Insert a comma every 3 digits from the right of the integer part
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    let sign = if value.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, formatted_integer, d),
        None => format!("{}{}", sign, formatted_integer),
    }
}

/// Dollar amount with 2 fraction digits: `$1,234.50`, `-$3.00`.
pub fn format_money(value: Decimal) -> String {
    let body = format_number_with_decimals(value, 2);
    match body.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None => format!("${}", body),
    }
}

/// Integer count with thousands separator.
pub fn format_number_int(value: usize) -> String {
    format_number_with_decimals(Decimal::from(value), 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(123456, 2)), "$1,234.56");
        assert_eq!(format_money(Decimal::new(123456789, 2)), "$1,234,567.89");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(Decimal::from(25)), "$25.00");
        assert_eq!(format_money(Decimal::new(-123456, 2)), "-$1,234.56");
    }

    #[test]
    fn test_format_number_with_decimals() {
        let value = Decimal::new(1234567, 3);
        assert_eq!(format_number_with_decimals(value, 0), "1,235");
        assert_eq!(format_number_with_decimals(value, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(value, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(value, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(Decimal::new(-4, 3), 2), "0.00");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567), "1,234,567");
        assert_eq!(format_number_int(0), "0");
        assert_eq!(format_number_int(999), "999");
    }
}
