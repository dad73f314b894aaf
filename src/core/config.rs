use super::input::{InterestType, RawInput, TimeUnit};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Form values used when the command line leaves a field unset.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    pub principal: String,
    pub rate: String,
    pub inflation: String,
    pub time: String,
    pub time_unit: TimeUnit,
    pub interest_type: InterestType,
    pub compounding_frequency: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let raw = RawInput::default();
        DefaultsConfig {
            principal: raw.principal,
            rate: raw.rate,
            inflation: raw.inflation,
            time: raw.time,
            time_unit: raw.time_unit,
            interest_type: raw.interest_type,
            compounding_frequency: raw.compounding_frequency,
        }
    }
}

impl From<&DefaultsConfig> for RawInput {
    fn from(d: &DefaultsConfig) -> RawInput {
        RawInput {
            principal: d.principal.clone(),
            rate: d.rate.clone(),
            inflation: d.inflation.clone(),
            time: d.time.clone(),
            time_unit: d.time_unit,
            interest_type: d.interest_type,
            compounding_frequency: d.compounding_frequency,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IneProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IpcApiProviderConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub ine: Option<IneProviderConfig>,
    pub ipc_api: Option<IpcApiProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            ine: Some(IneProviderConfig {
                base_url: "https://www.ine.es".to_string(),
            }),
            ipc_api: None,
        }
    }
}

/// Which provider answers `--live-inflation` and the `inflation` command.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InflationSource {
    #[default]
    Ine,
    IpcApi,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub inflation_source: InflationSource,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            defaults: DefaultsConfig::default(),
            providers: ProvidersConfig::default(),
            inflation_source: InflationSource::default(),
            currency: default_currency(),
        }
    }
}

impl AppConfig {
    /// Loads the default config file, or built-in defaults if there is none.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "realrate", "realrate")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
