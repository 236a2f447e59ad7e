//! The HTTP capability a provider fetches through.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::{fmt::Debug, time::Duration};

use crate::WeatherError;

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: StatusCode,
    pub body: String,
}

/// Performs a single GET. Implementations must not retry; a failure to obtain
/// any response is reported as [`WeatherError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, url: &str) -> Result<HttpReply, WeatherError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Transport(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, WeatherError> {
        // The URL carries the API key, so it is stripped from error messages.
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::Transport(format!("request failed: {}", e.without_url())))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::Transport(format!("failed to read body: {}", e.without_url())))?;

        Ok(HttpReply { status, body })
    }
}
