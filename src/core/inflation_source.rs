//! Live inflation abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InflationReading {
    pub annual_rate_percent: f64,
    pub source: String,
}

impl InflationReading {
    /// The reading as a replacement for the raw inflation form field.
    pub fn as_raw(&self) -> String {
        self.annual_rate_percent.to_string()
    }
}

/// Best-effort source of the latest annual inflation figure.
#[async_trait]
pub trait InflationProvider: Send + Sync {
    async fn fetch_inflation(&self) -> Result<InflationReading>;
}
