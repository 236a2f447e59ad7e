use crate::{
    Config, Weather, WeatherError,
    provider::apixu::ApixuProvider,
    transport::ReqwestTransport,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc, time::Duration};

pub mod apixu;

/// Anything that can report the current weather for the location it was built for.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self) -> Result<Weather, WeatherError>;
}

/// Construct an Apixu provider from the stored configuration.
pub fn provider_from_config(config: &Config) -> anyhow::Result<ApixuProvider> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `apixu configure` or set APIXU_API_KEY."
        )
    })?;

    provider_with_key(api_key, config)
}

/// Like [`provider_from_config`], but with a key obtained elsewhere (flag, environment).
pub fn provider_with_key(api_key: &str, config: &Config) -> anyhow::Result<ApixuProvider> {
    let mut provider = ApixuProvider::new(api_key);

    if let Some(location) = config.location.as_deref() {
        provider = provider.query(location);
    }
    if let Some(endpoint) = config.endpoint.as_deref() {
        provider = provider.with_endpoint(endpoint);
    }
    if let Some(secs) = config.timeout_secs {
        let transport = ReqwestTransport::with_timeout(Duration::from_secs(secs))?;
        provider = provider.with_transport(Arc::new(transport));
    }

    Ok(provider)
}
