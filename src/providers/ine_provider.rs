//! Spanish statistics office (INE) CPI page scraper.
//!
//! The page carries no structured data; the annual CPI variation is read
//! from the headline sentence "... variación anual en el 2,3%".

use super::util::{RetryPolicy, get_text};
use crate::core::{InflationProvider, InflationReading};
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, instrument};

pub const INE_CPI_PATH: &str = "/dyngs/INEbase/es/operacion.htm";
const INE_CPI_QUERY: &str = "c=Estadistica_C&cid=1254736176802&menu=ultiDatos&idp=1254735976607";
const ANNUAL_VARIATION_PHRASE: &str = "variación anual en el";

pub struct IneProvider {
    base_url: String,
    retry: RetryPolicy,
}

impl IneProvider {
    pub fn new(base_url: &str) -> Self {
        IneProvider {
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

fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Extracts the annual variation percentage from the CPI page HTML.
pub fn extract_annual_variation(html: &str) -> Result<f64> {
    let text = strip_tags(&html.replace("&oacute;", "ó").replace("&nbsp;", " "));
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let lowered = text.to_lowercase();

    let start = lowered
        .find(ANNUAL_VARIATION_PHRASE)
        .ok_or_else(|| anyhow!("Annual CPI variation not found in INE page"))?
        + ANNUAL_VARIATION_PHRASE.len();
    let rest = &lowered[start..];
    let end = rest
        .find('%')
        .ok_or_else(|| anyhow!("Annual CPI variation is missing its percent sign"))?;

    let number = rest[..end].trim().replace(',', ".");
    let value: f64 = number
        .parse()
        .with_context(|| format!("Failed to parse annual CPI variation: '{number}'"))?;
    if !value.is_finite() {
        return Err(anyhow!("Annual CPI variation is not finite: '{number}'"));
    }
    Ok(value)
}

#[async_trait]
impl InflationProvider for IneProvider {
    #[instrument(name = "IneInflationFetch", skip(self))]
    async fn fetch_inflation(&self) -> Result<InflationReading> {
        let url = format!("{}{}?{}", self.base_url, INE_CPI_PATH, INE_CPI_QUERY);
        debug!("Requesting CPI page from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; realrate/0.1)")
            .build()?;
        let html = get_text(&client, &url, self.retry)
            .await
            .context("Failed to fetch INE CPI page")?;

        let annual_rate_percent = extract_annual_variation(&html)?;
        debug!(annual_rate_percent, "Parsed INE annual CPI variation");

        Ok(InflationReading {
            annual_rate_percent,
            source: "INE".to_string(),
        })
    }
}
