pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{InterestType, RawInput, TimeUnit};
use anyhow::Result;
use tracing::{debug, info};

/// Form fields given on the command line. Unset fields fall back to the
/// configured defaults.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub principal: Option<String>,
    pub rate: Option<String>,
    pub inflation: Option<String>,
    pub time: Option<String>,
    pub time_unit: Option<TimeUnit>,
    pub interest_type: Option<InterestType>,
    pub compounding_frequency: Option<u32>,
}

impl InputOverrides {
    pub fn apply(self, base: RawInput) -> RawInput {
        RawInput {
            principal: self.principal.unwrap_or(base.principal),
            rate: self.rate.unwrap_or(base.rate),
            inflation: self.inflation.unwrap_or(base.inflation),
            time: self.time.unwrap_or(base.time),
            time_unit: self.time_unit.unwrap_or(base.time_unit),
            interest_type: self.interest_type.unwrap_or(base.interest_type),
            compounding_frequency: self
                .compounding_frequency
                .unwrap_or(base.compounding_frequency),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Calculate {
        inputs: InputOverrides,
        live_inflation: bool,
        json: bool,
    },
    Compare {
        inputs: InputOverrides,
        live_inflation: bool,
    },
    Inflation,
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

async fn prepare_input(
    config: &AppConfig,
    inputs: InputOverrides,
    live_inflation: bool,
) -> Result<RawInput> {
    let mut raw = inputs.apply(RawInput::from(&config.defaults));
    if live_inflation {
        let provider = providers::inflation_provider(config)?;
        cli::inflation::refresh_inflation(&mut raw, provider.as_ref()).await;
    }
    Ok(raw)
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("realrate starting...");
    let config = load_config(config_path)?;

    match command {
        AppCommand::Calculate {
            inputs,
            live_inflation,
            json,
        } => {
            let raw = prepare_input(&config, inputs, live_inflation).await?;
            cli::calculate::run(&raw, &config.currency, json)
        }
        AppCommand::Compare {
            inputs,
            live_inflation,
        } => {
            let raw = prepare_input(&config, inputs, live_inflation).await?;
            cli::compare::run(&raw, &config.currency)
        }
        AppCommand::Inflation => {
            let provider = providers::inflation_provider(&config)?;
            cli::inflation::run(provider.as_ref()).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{InflationSource, IpcApiProviderConfig};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn ipc_api_config(ipc: f64, expected_calls: u64) -> (MockServer, AppConfig) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ipc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ipc": ipc })))
            .expect(expected_calls)
            .mount(&server)
            .await;

        let mut config = AppConfig {
            inflation_source: InflationSource::IpcApi,
            ..AppConfig::default()
        };
        config.providers.ipc_api = Some(IpcApiProviderConfig {
            base_url: server.uri(),
        });
        (server, config)
    }

    #[tokio::test]
    async fn test_live_inflation_replaces_configured_rate() {
        let (_server, config) = ipc_api_config(2.3, 1).await;
        let inputs = InputOverrides {
            inflation: Some("7".to_string()),
            ..InputOverrides::default()
        };

        let raw = prepare_input(&config, inputs, true).await.unwrap();

        assert_eq!(raw.inflation, "2.3");
        assert_eq!(raw.principal, "1000");
        let result = crate::core::calculate_raw(&raw).unwrap();
        approx::assert_abs_diff_eq!(result.real_rate, 1.05 / 1.023 - 1.0, epsilon = 1e-12);
    }

    #[tokio::test]
    async fn test_without_live_inflation_provider_is_not_called() {
        let (_server, config) = ipc_api_config(2.3, 0).await;
        let inputs = InputOverrides {
            inflation: Some("7".to_string()),
            ..InputOverrides::default()
        };

        let raw = prepare_input(&config, inputs, false).await.unwrap();

        assert_eq!(raw.inflation, "7");
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = InputOverrides {
            principal: Some("250".to_string()),
            time_unit: Some(TimeUnit::Months),
            compounding_frequency: Some(365),
            ..InputOverrides::default()
        };
        let raw = overrides.apply(RawInput::default());

        assert_eq!(raw.principal, "250");
        assert_eq!(raw.rate, "5");
        assert_eq!(raw.inflation, "3");
        assert_eq!(raw.time, "10");
        assert_eq!(raw.time_unit, TimeUnit::Months);
        assert_eq!(raw.interest_type, InterestType::Compound);
        assert_eq!(raw.compounding_frequency, 365);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let raw = InputOverrides::default().apply(RawInput::default());
        assert_eq!(raw, RawInput::default());
    }
}
