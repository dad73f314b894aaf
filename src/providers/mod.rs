pub mod ine_provider;
pub mod ipc_api_provider;
pub mod util;

use crate::core::InflationProvider;
use crate::core::config::{AppConfig, InflationSource};
use anyhow::{Result, anyhow};

/// Builds the inflation provider selected in the configuration.
pub fn inflation_provider(config: &AppConfig) -> Result<Box<dyn InflationProvider>> {
    match config.inflation_source {
        InflationSource::Ine => {
            let base_url = config
                .providers
                .ine
                .as_ref()
                .map_or("https://www.ine.es", |p| &p.base_url);
            Ok(Box::new(ine_provider::IneProvider::new(base_url)))
        }
        InflationSource::IpcApi => {
            let ipc = config.providers.ipc_api.as_ref().ok_or_else(|| {
                anyhow!("inflation_source is ipc_api but providers.ipc_api is not configured")
            })?;
            Ok(Box::new(ipc_api_provider::IpcApiProvider::new(&ipc.base_url)))
        }
    }
}
