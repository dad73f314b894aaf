//! Terminal presentation of calculations

pub mod calculate;
pub mod compare;
pub mod inflation;
pub mod setup;
pub mod ui;
