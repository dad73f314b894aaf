//! Nominal growth of a principal under the supported accrual models.

use super::input::InterestType;

/// Final nominal amount after `years` at `decimal_rate`.
///
/// `compounding_frequency` is only read for [`InterestType::Compound`]. Extreme
/// inputs may overflow to infinity or produce NaN; that value is returned
/// unchanged.
pub fn grow(
    principal: f64,
    decimal_rate: f64,
    years: f64,
    interest_type: InterestType,
    compounding_frequency: u32,
) -> f64 {
    match interest_type {
        InterestType::Simple => principal * (1.0 + decimal_rate * years),
        InterestType::Compound => {
            let n = compounding_frequency as f64;
            principal * (1.0 + decimal_rate / n).powf(n * years)
        }
        InterestType::Continuous => principal * (decimal_rate * years).exp(),
    }
}
