//! # Formatting Utilities
//!
//! Number formatting shared by every page of the exchange frontend.
//!
//! - [`format_number`] - Comma separated number with fixed decimals
//! - [`format_usd`] - Dollar amount with two decimals
//! - [`format_volume`] - Compact volume (`K`, `M`, `B`)
//! - [`format_percentage`] - Signed percentage
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_number, format_volume};
//!
//! assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
//! assert_eq!(format_volume(2_450_000.0), "2.45M");
//! ```

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Arguments
///
/// * `value` - The number to format
/// * `decimals` - Number of decimal places to show
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(-123.0, 1), "-123.0");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" reads oddly next to a price, keep the sign only for visible digits
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a price with two decimals and thousands separators.
pub fn format_price(price: f64) -> String {
    format_number(price, 2)
}

/// Format a dollar amount, e.g. `$1,234.56`.
pub fn format_usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", format_number(-value, 2))
    } else {
        format!("${}", format_number(value, 2))
    }
}

/// Compact volume: billions as `B`, millions as `M`, everything else as `K`.
///
/// ```rust
/// use shared::utils::format_volume;
///
/// assert_eq!(format_volume(3_200_000_000.0), "3.20B");
/// assert_eq!(format_volume(950.0), "0.95K");
/// ```
pub fn format_volume(volume: f64) -> String {
    if volume >= 1_000_000_000.0 {
        format!("{:.2}B", volume / 1_000_000_000.0)
    } else if volume >= 1_000_000.0 {
        format!("{:.2}M", volume / 1_000_000.0)
    } else {
        format!("{:.2}K", volume / 1_000.0)
    }
}

/// Format percentage change with sign
pub fn format_percentage(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Arrow plus unsigned percentage, e.g. `↗ 2.34%` / `↘ 1.23%`.
pub fn format_change_arrow(pct: f64) -> String {
    let arrow = if pct >= 0.0 { "↗" } else { "↘" };
    format!("{} {:.2}%", arrow, pct.abs())
}
