use serde::{Serialize, Serializer};

/// Nominal and inflation-adjusted outcome of a single calculation.
///
/// Infinite and NaN fields serialize as the strings `"inf"`, `"-inf"` and
/// `"NaN"` since JSON has no number for them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(serialize_with = "serialize_amount")]
    pub final_amount: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub total_interest: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub principal: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub real_rate: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub real_final_amount: f64,
    #[serde(serialize_with = "serialize_amount")]
    pub real_total_interest: f64,
}

fn serialize_amount<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

pub fn assemble(
    principal: f64,
    final_amount: f64,
    total_interest: f64,
    real_rate: f64,
    real_final_amount: f64,
    real_total_interest: f64,
) -> CalculationResult {
    CalculationResult {
        final_amount,
        total_interest,
        principal,
        real_rate,
        real_final_amount,
        real_total_interest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let result = assemble(1000.0, 1500.0, 500.0, 0.02, 1200.0, 200.0);
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["principal"], 1000.0);
        assert_eq!(json["finalAmount"], 1500.0);
        assert_eq!(json["totalInterest"], 500.0);
        assert_eq!(json["realRate"], 0.02);
        assert_eq!(json["realFinalAmount"], 1200.0);
        assert_eq!(json["realTotalInterest"], 200.0);
    }

    #[test]
    fn test_non_finite_amounts_serialize_as_text() {
        let result = assemble(
            1000.0,
            f64::INFINITY,
            f64::INFINITY,
            0.02,
            f64::NAN,
            f64::NEG_INFINITY,
        );
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json["principal"], 1000.0);
        assert_eq!(json["finalAmount"], "inf");
        assert_eq!(json["totalInterest"], "inf");
        assert_eq!(json["realRate"], 0.02);
        assert_eq!(json["realFinalAmount"], "NaN");
        assert_eq!(json["realTotalInterest"], "-inf");
    }
}
