//! Core calculation logic and abstractions

pub mod calculator;
pub mod config;
pub mod growth;
pub mod inflation;
pub mod inflation_source;
pub mod input;
pub mod log;
pub mod result;

// Re-export main types for cleaner imports
pub use calculator::{calculate, calculate_raw};
pub use inflation_source::{InflationProvider, InflationReading};
pub use input::{CalculationInput, InterestType, RawInput, TimeUnit};
pub use result::CalculationResult;
