//! The calculation pipeline: normalize, grow, adjust for inflation, assemble.
//!
//! Every function here is pure. Invalid input never surfaces as an error to
//! the caller; it resolves to `None`, which the presentation layer renders as
//! "no result".

use super::growth::grow;
use super::inflation::adjust_for_inflation;
use super::input::{CalculationInput, InvalidInput, RawInput, normalize};
use super::result::{CalculationResult, assemble};
use tracing::debug;

/// Computes nominal and real outcomes for an already parsed input.
pub fn calculate(input: &CalculationInput) -> Option<CalculationResult> {
    match try_calculate(input) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!(reason = %e, "No result for calculation input");
            None
        }
    }
}

/// Normalizes raw form fields and runs [`calculate`].
pub fn calculate_raw(raw: &RawInput) -> Option<CalculationResult> {
    match normalize(raw) {
        Ok(input) => calculate(&input),
        Err(e) => {
            debug!(reason = %e, "Rejected raw input");
            None
        }
    }
}

fn try_calculate(input: &CalculationInput) -> Result<CalculationResult, InvalidInput> {
    input.validate()?;

    let principal = input.principal;
    let decimal_rate = input.decimal_rate();
    let years = input.years();

    let final_amount = grow(
        principal,
        decimal_rate,
        years,
        input.interest_type,
        input.compounding_frequency,
    );
    let total_interest = final_amount - principal;
    debug!(
        interest_type = %input.interest_type,
        years,
        final_amount,
        "Computed nominal growth"
    );

    let real = adjust_for_inflation(
        final_amount,
        principal,
        decimal_rate,
        input.decimal_inflation(),
        years,
    )
    .ok_or_else(|| {
        InvalidInput::DomainViolation("inflation of -100% has no real equivalent".to_string())
    })?;

    Ok(assemble(
        principal,
        final_amount,
        total_interest,
        real.real_rate,
        real.real_final_amount,
        real.real_total_interest,
    ))
}
