//! Input normalization: raw form strings into validated calculation inputs.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Unit of the time period supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Years,
    Months,
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TimeUnit::Years => "years",
                TimeUnit::Months => "months",
            }
        )
    }
}

impl FromStr for TimeUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "years" => Ok(TimeUnit::Years),
            "months" => Ok(TimeUnit::Months),
            _ => Err(anyhow::anyhow!("Invalid time unit: {}", s)),
        }
    }
}

/// Interest accrual model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    Simple,
    #[default]
    Compound,
    Continuous,
}

impl Display for InterestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                InterestType::Simple => "simple",
                InterestType::Compound => "compound",
                InterestType::Continuous => "continuous",
            }
        )
    }
}

impl FromStr for InterestType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(InterestType::Simple),
            "compound" => Ok(InterestType::Compound),
            "continuous" => Ok(InterestType::Continuous),
            _ => Err(anyhow::anyhow!("Invalid interest type: {}", s)),
        }
    }
}

/// Compounding frequencies offered to users, with their labels.
pub const COMPOUNDING_PRESETS: [(&str, u32); 5] = [
    ("Annual", 1),
    ("Semiannual", 2),
    ("Quarterly", 4),
    ("Monthly", 12),
    ("Daily", 365),
];

/// Why an input produced no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{field} is not a number: '{value}'")]
    ParseFailure { field: &'static str, value: String },

    #[error("{0}")]
    DomainViolation(String),
}

/// Form fields exactly as the presentation layer holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub principal: String,
    pub rate: String,
    pub inflation: String,
    pub time: String,
    #[serde(default)]
    pub time_unit: TimeUnit,
    #[serde(default)]
    pub interest_type: InterestType,
    #[serde(default = "default_frequency")]
    pub compounding_frequency: u32,
}

fn default_frequency() -> u32 {
    12
}

impl Default for RawInput {
    fn default() -> Self {
        RawInput {
            principal: "1000".to_string(),
            rate: "5".to_string(),
            inflation: "3".to_string(),
            time: "10".to_string(),
            time_unit: TimeUnit::Years,
            interest_type: InterestType::Compound,
            compounding_frequency: default_frequency(),
        }
    }
}

/// A parsed calculation request. Rates are kept in percent and time in its
/// original unit; the accessors convert to the decimal / year quantities
/// every downstream stage works with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    pub principal: f64,
    pub nominal_rate_percent: f64,
    pub inflation_rate_percent: f64,
    pub time_value: f64,
    pub time_unit: TimeUnit,
    pub compounding_frequency: u32,
    pub interest_type: InterestType,
}

impl CalculationInput {
    pub fn decimal_rate(&self) -> f64 {
        self.nominal_rate_percent / 100.0
    }

    pub fn decimal_inflation(&self) -> f64 {
        self.inflation_rate_percent / 100.0
    }

    pub fn years(&self) -> f64 {
        match self.time_unit {
            TimeUnit::Years => self.time_value,
            TimeUnit::Months => self.time_value / 12.0,
        }
    }

    /// Checks the domain constraints shared by the normalizer and `calculate`.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.principal.is_nan() || self.principal <= 0.0 {
            return Err(InvalidInput::DomainViolation(format!(
                "principal must be positive, got {}",
                self.principal
            )));
        }
        let years = self.years();
        if years.is_nan() || years <= 0.0 {
            return Err(InvalidInput::DomainViolation(format!(
                "time must be positive, got {} {}",
                self.time_value, self.time_unit
            )));
        }
        if self.interest_type == InterestType::Compound && self.compounding_frequency == 0 {
            return Err(InvalidInput::DomainViolation(
                "compounding frequency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InvalidInput> {
    let failure = || InvalidInput::ParseFailure {
        field,
        value: raw.to_string(),
    };
    let text = raw.trim();
    let value: f64 = text.parse().map_err(|_| failure())?;
    // `inf`/`nan` spellings are words, not numbers. Digits that overflow
    // (`1e400`) parse to infinity and are kept.
    let is_word = text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'));
    if value.is_nan() || is_word {
        return Err(failure());
    }
    Ok(value)
}

/// Parses and validates raw form fields.
pub fn normalize(raw: &RawInput) -> Result<CalculationInput, InvalidInput> {
    let input = CalculationInput {
        principal: parse_field("principal", &raw.principal)?,
        nominal_rate_percent: parse_field("rate", &raw.rate)?,
        inflation_rate_percent: parse_field("inflation", &raw.inflation)?,
        time_value: parse_field("time", &raw.time)?,
        time_unit: raw.time_unit,
        compounding_frequency: raw.compounding_frequency,
        interest_type: raw.interest_type,
    };
    input.validate()?;
    Ok(input)
}
