use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Formats an amount as `<symbol>1,234.56`, with the sign ahead of the symbol.
///
/// Infinite and NaN amounts are shown as-is.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*d);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac_part}")
}

/// Formats a decimal fraction as a percentage with two decimals.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Right-aligned cell, red when `value` is negative and green otherwise.
pub fn signed_cell(text: String, value: f64) -> Cell {
    let color = if value < 0.0 { Color::Red } else { Color::Green };
    Cell::new(text).fg(color).set_alignment(CellAlignment::Right)
}

/// Right-aligned plain value cell.
pub fn value_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Creates a red "N/A" cell for a figure that could not be computed.
pub fn na_cell() -> Cell {
    Cell::new("N/A")
        .fg(Color::Red)
        .set_alignment(CellAlignment::Right)
}

/// Creates a spinner shown while a network fetch is in flight.
pub fn new_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1647.0095, "$"), "$1,647.01");
        assert_eq!(format_currency(1_234_567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(999.999, "$"), "$1,000.00");
        assert_eq!(format_currency(12.5, "€"), "€12.50");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-225.53, "$"), "-$225.53");
        assert_eq!(format_currency(-1500.0, "$"), "-$1,500.00");
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::INFINITY, "$"), "inf");
        assert_eq!(format_currency(f64::NAN, "$"), "NaN");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0194174757), "1.94%");
        assert_eq!(format_percent(-0.0125), "-1.25%");
        assert_eq!(format_percent(0.0), "0.00%");
    }
}
