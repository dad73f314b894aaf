use super::util::{RetryPolicy, get_text};
use crate::core::{InflationProvider, InflationReading};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Client for a small JSON service answering `GET /ipc` with `{"ipc": 2.3}`.
pub struct IpcApiProvider {
    base_url: String,
    retry: RetryPolicy,
}

impl IpcApiProvider {
    pub fn new(base_url: &str) -> Self {
        IpcApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[derive(Debug, Deserialize)]
struct IpcResponse {
    ipc: Option<f64>,
}

#[async_trait]
impl InflationProvider for IpcApiProvider {
    async fn fetch_inflation(&self) -> Result<InflationReading> {
        let url = format!("{}/ipc", self.base_url);
        debug!("Requesting inflation from {}", url);

        let client = reqwest::Client::builder().user_agent("realrate/0.1").build()?;
        let text = get_text(&client, &url, self.retry)
            .await
            .with_context(|| format!("Failed to fetch inflation from {url}"))?;

        let data: IpcResponse = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse inflation response: '{text}'"))?;
        let annual_rate_percent = data
            .ipc
            .ok_or_else(|| anyhow!("Inflation service returned no value"))?;

        Ok(InflationReading {
            annual_rate_percent,
            source: url,
        })
    }
}
