use super::{calculate::render_placeholder, ui};
use crate::core::input::{COMPOUNDING_PRESETS, normalize};
use crate::core::{CalculationInput, CalculationResult, InterestType, RawInput, calculate};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// One accrual scheme evaluated against shared inputs.
#[derive(Debug, Clone)]
pub struct SchemeRow {
    pub label: String,
    pub result: Option<CalculationResult>,
}

/// Evaluates simple interest, compound interest at every preset frequency,
/// and continuous compounding for the same principal, rates and period.
pub fn compare_schemes(input: &CalculationInput) -> Vec<SchemeRow> {
    let mut schemes = vec![("Simple".to_string(), InterestType::Simple, 1)];
    schemes.extend(COMPOUNDING_PRESETS.iter().map(|(label, n)| {
        (format!("Compound ({label})"), InterestType::Compound, *n)
    }));
    schemes.push(("Continuous".to_string(), InterestType::Continuous, 1));

    schemes
        .into_iter()
        .map(|(label, interest_type, compounding_frequency)| {
            let scheme_input = CalculationInput {
                interest_type,
                compounding_frequency,
                ..*input
            };
            SchemeRow {
                label,
                result: calculate(&scheme_input),
            }
        })
        .collect()
}

pub fn run(raw: &RawInput, currency: &str) -> Result<()> {
    let input = match normalize(raw) {
        Ok(input) => input,
        Err(e) => {
            debug!(reason = %e, "Nothing to compare");
            println!("{}", render_placeholder());
            return Ok(());
        }
    };

    let rows = compare_schemes(&input);
    println!("{}", display_rows(&rows, currency));
    Ok(())
}

fn display_rows(rows: &[SchemeRow], currency: &str) -> String {
    let money = |v: f64| ui::format_currency(v, currency);
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Scheme"),
        ui::header_cell("Final Amount"),
        ui::header_cell("Interest"),
        ui::header_cell("Real Final Amount"),
        ui::header_cell("Real Gain"),
    ]);

    for row in rows {
        let cells = match &row.result {
            Some(r) => vec![
                Cell::new(&row.label),
                ui::value_cell(money(r.final_amount)),
                ui::signed_cell(money(r.total_interest), r.total_interest),
                ui::value_cell(money(r.real_final_amount)),
                ui::signed_cell(money(r.real_total_interest), r.real_total_interest),
            ],
            None => vec![
                Cell::new(&row.label),
                ui::na_cell(),
                ui::na_cell(),
                ui::na_cell(),
                ui::na_cell(),
            ],
        };
        table.add_row(cells);
    }

    let mut output = table.to_string();
    // Real rate comes from the nominal rate alone, so it is shared by every row
    if let Some(r) = rows.iter().find_map(|row| row.result) {
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Real interest rate", ui::StyleType::TotalLabel),
            ui::style_text(&ui::format_percent(r.real_rate), ui::StyleType::TotalValue)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeUnit;
    use approx::assert_abs_diff_eq;

    fn input() -> CalculationInput {
        CalculationInput {
            principal: 1000.0,
            nominal_rate_percent: 5.0,
            inflation_rate_percent: 3.0,
            time_value: 10.0,
            time_unit: TimeUnit::Years,
            compounding_frequency: 12,
            interest_type: InterestType::Simple,
        }
    }

    #[test]
    fn test_compare_covers_every_scheme() {
        let rows = compare_schemes(&input());
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Simple",
                "Compound (Annual)",
                "Compound (Semiannual)",
                "Compound (Quarterly)",
                "Compound (Monthly)",
                "Compound (Daily)",
                "Continuous",
            ]
        );
        assert!(rows.iter().all(|r| r.result.is_some()));
    }

    #[test]
    fn test_compound_rows_approach_continuous() {
        let rows = compare_schemes(&input());
        let amounts: Vec<f64> = rows
            .iter()
            .map(|r| r.result.unwrap().final_amount)
            .collect();

        assert_eq!(amounts[0], 1500.0);
        for pair in amounts[1..].windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_abs_diff_eq!(amounts[4], 1647.01, epsilon = 0.005);
        assert_abs_diff_eq!(amounts[6], 1648.72, epsilon = 0.005);
    }

    #[test]
    fn test_real_rate_shared_across_rows() {
        let rows = compare_schemes(&input());
        let first = rows[0].result.unwrap().real_rate;
        assert!(rows.iter().all(|r| r.result.unwrap().real_rate == first));

        let output = display_rows(&rows, "$");
        assert!(output.contains("Compound (Daily)"));
        assert!(output.contains("$1,500.00"));
        assert!(output.contains("1.94%"));
    }

    #[test]
    fn test_absent_rows_render_na() {
        let mut bad = input();
        bad.inflation_rate_percent = -100.0;
        let rows = compare_schemes(&bad);
        assert!(rows.iter().all(|r| r.result.is_none()));

        let output = display_rows(&rows, "$");
        assert!(output.contains("N/A"));
        assert!(!output.contains("Real interest rate"));
    }
}
