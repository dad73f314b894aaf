//! Inflation adjustment of nominal quantities.

/// Inflation-adjusted counterparts of the nominal figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealValues {
    pub real_rate: f64,
    pub real_final_amount: f64,
    pub real_total_interest: f64,
}

/// Real rate from the Fisher relation `(1 + real) = (1 + nominal) / (1 + inflation)`.
///
/// Independent of time. Returns `None` for inflation of exactly -100%.
pub fn fisher_real_rate(decimal_rate: f64, decimal_inflation: f64) -> Option<f64> {
    let divisor = 1.0 + decimal_inflation;
    if divisor == 0.0 {
        return None;
    }
    Some((1.0 + decimal_rate) / divisor - 1.0)
}

/// Discounts `final_amount` by cumulative inflation over `years` and derives
/// the real rate from the nominal `decimal_rate`.
///
/// `real_rate` must not be derived from the real final amount: the two are
/// computed independently. Returns `None` when `decimal_inflation` is -1.
pub fn adjust_for_inflation(
    final_amount: f64,
    principal: f64,
    decimal_rate: f64,
    decimal_inflation: f64,
    years: f64,
) -> Option<RealValues> {
    let real_rate = fisher_real_rate(decimal_rate, decimal_inflation)?;
    let real_final_amount = final_amount / (1.0 + decimal_inflation).powf(years);

    Some(RealValues {
        real_rate,
        real_final_amount,
        real_total_interest: real_final_amount - principal,
    })
}
