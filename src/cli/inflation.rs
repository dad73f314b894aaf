use super::ui;
use crate::core::{InflationProvider, InflationReading, RawInput};
use anyhow::Result;
use tracing::{info, warn};

async fn fetch_with_spinner(provider: &dyn InflationProvider) -> Result<InflationReading> {
    let pb = ui::new_spinner("Fetching latest inflation figure...");
    let result = provider.fetch_inflation().await;
    pb.finish_and_clear();
    result
}

/// Replaces the raw inflation field with a live reading.
///
/// A failed fetch leaves `raw` untouched; the calculation then runs with the
/// inflation the user already had.
pub async fn refresh_inflation(raw: &mut RawInput, provider: &dyn InflationProvider) {
    match fetch_with_spinner(provider).await {
        Ok(reading) => {
            info!(
                source = %reading.source,
                inflation = reading.annual_rate_percent,
                "Using live inflation"
            );
            raw.inflation = reading.as_raw();
        }
        Err(e) => {
            warn!(error = %e, kept = %raw.inflation, "Live inflation unavailable");
            eprintln!(
                "{}",
                ui::style_text(
                    &format!("Could not fetch live inflation, keeping {}%: {e}", raw.inflation),
                    ui::StyleType::Error
                )
            );
        }
    }
}

pub async fn run(provider: &dyn InflationProvider) -> Result<()> {
    let reading = fetch_with_spinner(provider).await?;
    println!(
        "{} ({}): {}",
        ui::style_text("Annual inflation", ui::StyleType::TotalLabel),
        reading.source,
        ui::style_text(
            &format!("{:.2}%", reading.annual_rate_percent),
            ui::StyleType::TotalValue
        )
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct MockInflationProvider {
        reading: Option<f64>,
    }

    #[async_trait]
    impl InflationProvider for MockInflationProvider {
        async fn fetch_inflation(&self) -> Result<InflationReading> {
            self.reading
                .map(|annual_rate_percent| InflationReading {
                    annual_rate_percent,
                    source: "mock".to_string(),
                })
                .ok_or_else(|| anyhow!("service down"))
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_inflation() {
        let provider = MockInflationProvider { reading: Some(2.3) };
        let mut raw = RawInput::default();

        refresh_inflation(&mut raw, &provider).await;
        assert_eq!(raw.inflation, "2.3");
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_value() {
        let provider = MockInflationProvider { reading: None };
        let mut raw = RawInput {
            inflation: "4.1".to_string(),
            ..RawInput::default()
        };

        refresh_inflation(&mut raw, &provider).await;
        assert_eq!(raw.inflation, "4.1");
    }

    #[tokio::test]
    async fn test_run_propagates_fetch_error() {
        let provider = MockInflationProvider { reading: None };
        assert!(run(&provider).await.is_err());
    }
}
