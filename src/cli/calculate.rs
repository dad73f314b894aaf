use super::ui;
use crate::core::{CalculationResult, RawInput, calculate_raw};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// Message shown when inputs produce no result.
pub const PLACEHOLDER: &str = "Your results will appear here. Enter positive numeric amounts and try again.";

pub fn run(raw: &RawInput, currency: &str, json: bool) -> Result<()> {
    debug!(?raw, "Calculating");
    let result = calculate_raw(raw);

    if json {
        println!("{}", render_json(result.as_ref())?);
        return Ok(());
    }

    match result {
        Some(result) => {
            println!(
                "{}",
                result.display_as_table(raw.interest_type.to_string().as_str(), currency)
            );
        }
        None => println!("{}", render_placeholder()),
    }
    Ok(())
}

/// JSON for the result, `null` when there is none.
pub fn render_json(result: Option<&CalculationResult>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&result)?)
}

pub fn render_placeholder() -> String {
    ui::style_text(PLACEHOLDER, ui::StyleType::Subtle)
}

impl CalculationResult {
    pub fn display_as_table(&self, interest_label: &str, currency: &str) -> String {
        let money = |v: f64| ui::format_currency(v, currency);

        let mut nominal = ui::new_styled_table();
        nominal.set_header(vec![ui::header_cell("Nominal"), ui::header_cell("Amount")]);
        nominal.add_row(vec![
            Cell::new("Principal"),
            ui::value_cell(money(self.principal)),
        ]);
        nominal.add_row(vec![
            Cell::new("Total interest earned"),
            ui::signed_cell(money(self.total_interest), self.total_interest),
        ]);

        let mut real = ui::new_styled_table();
        real.set_header(vec![ui::header_cell("Real"), ui::header_cell("Amount")]);
        real.add_row(vec![
            Cell::new("Real interest rate"),
            ui::signed_cell(ui::format_percent(self.real_rate), self.real_rate),
        ]);
        real.add_row(vec![
            Cell::new("Real gain"),
            ui::signed_cell(money(self.real_total_interest), self.real_total_interest),
        ]);

        let mut output = format!(
            "Interest: {}\n\n",
            ui::style_text(interest_label, ui::StyleType::Title)
        );
        output.push_str(&format!(
            "{}: {}\n",
            ui::style_text("Final amount (nominal)", ui::StyleType::TotalLabel),
            ui::style_text(&money(self.final_amount), ui::StyleType::TotalValue)
        ));
        output.push_str(&nominal.to_string());
        output.push_str(&format!(
            "\n\n{}: {}\n",
            ui::style_text("Final purchasing power (real)", ui::StyleType::TotalLabel),
            ui::style_text(&money(self.real_final_amount), ui::StyleType::TotalValue)
        ));
        output.push_str(&real.to_string());

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_formatted_figures() {
        let raw = RawInput::default();
        let result = calculate_raw(&raw).unwrap();
        let output = result.display_as_table("compound", "$");

        assert!(output.contains("compound"));
        assert!(output.contains("$1,647.01"));
        assert!(output.contains("$1,000.00"));
        assert!(output.contains("$647.01"));
        assert!(output.contains("$1,225.53"));
        assert!(output.contains("1.94%"));
        assert!(output.contains("$225.53"));
    }

    #[test]
    fn test_display_negative_real_gain() {
        let raw = RawInput {
            rate: "1".to_string(),
            inflation: "4".to_string(),
            ..RawInput::default()
        };
        let result = calculate_raw(&raw).unwrap();
        let output = result.display_as_table("compound", "€");

        assert!(result.real_rate < 0.0);
        assert!(output.contains("-€"));
        assert!(output.contains("-2.88%"));
    }

    #[test]
    fn test_json_keeps_overflowed_amounts_visible() {
        let raw = RawInput {
            rate: "1000000".to_string(),
            time: "1000000".to_string(),
            interest_type: crate::core::InterestType::Continuous,
            ..RawInput::default()
        };
        let result = calculate_raw(&raw).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(Some(&result)).unwrap()).unwrap();

        assert_eq!(json["principal"], 1000.0);
        assert_eq!(json["finalAmount"], "inf");
        assert_eq!(json["totalInterest"], "inf");
        assert!(!json["realFinalAmount"].is_null());
    }

    #[test]
    fn test_json_for_absent_result_is_null() {
        assert_eq!(render_json(None).unwrap(), "null");
    }

    #[test]
    fn test_placeholder_mentions_results() {
        assert!(render_placeholder().contains("Your results will appear here"));
    }
}
