//! Apixu current-conditions provider.
//!
//! A provider is an immutable value: [`ApixuProvider::query`] and the other
//! `with_*` methods return a new provider and leave the receiver untouched, so
//! one keyed base value can fan out to many locations.

use async_trait::async_trait;
use std::{fmt, sync::Arc};
use tracing::{debug, instrument};

use crate::{
    Weather, WeatherError,
    transport::{ReqwestTransport, Transport},
};

use super::WeatherProvider;

mod classify;
mod conditions;
mod query;
mod response;

pub use classify::classify;
pub use conditions::condition_for;
pub use query::build_url;
pub use response::translate;

pub const DEFAULT_ENDPOINT: &str = "http://api.apixu.com/v1/current.json";
pub const DEFAULT_LOCATION: &str = "auto:ip";
pub const ATTRIBUTION: &str = "Apixu";

#[derive(Clone)]
pub struct ApixuProvider {
    api_key: String,
    location: String,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ApixuProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApixuProvider")
            .field("api_key", &"<redacted>")
            .field("location", &self.location)
            .field("endpoint", &self.endpoint)
            .field("transport", &self.transport)
            .finish()
    }
}

impl ApixuProvider {
    /// Provider for `api_key`, locating the caller by IP until [`query`](Self::query) is used.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            location: DEFAULT_LOCATION.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            transport: Arc::new(ReqwestTransport::new()),
        }
    }

    /// Same key, different location. Accepts anything Apixu does: zip codes,
    /// city names, `lat,long`, `metar:<ICAO>`, `iata:<code>`, IPs, `auto:ip`.
    pub fn query(&self, location: impl Into<String>) -> Self {
        Self { location: location.into(), ..self.clone() }
    }

    pub fn with_endpoint(&self, endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), ..self.clone() }
    }

    pub fn with_transport(&self, transport: Arc<dyn Transport>) -> Self {
        Self { transport, ..self.clone() }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The exact URL a fetch will request.
    pub fn url(&self) -> String {
        build_url(&self.endpoint, &self.api_key, &self.location)
    }
}

#[async_trait]
impl WeatherProvider for ApixuProvider {
    #[instrument(skip(self), fields(location = %self.location))]
    async fn get_weather(&self) -> Result<Weather, WeatherError> {
        let reply = self.transport.get(&self.url()).await?;
        debug!(status = %reply.status, bytes = reply.body.len(), "Received Apixu response");

        classify(reply.status, &reply.body)?;
        let weather = translate(&reply.body)?;

        debug!(condition = %weather.condition, "Translated Apixu response");
        Ok(weather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Condition, transport::HttpReply};
    use reqwest::StatusCode;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct CannedTransport {
        reply: Result<HttpReply, WeatherError>,
        requested: Mutex<Vec<String>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(HttpReply {
                    status: StatusCode::from_u16(status).unwrap(),
                    body: body.to_string(),
                }),
                requested: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: WeatherError) -> Arc<Self> {
            Arc::new(Self { reply: Err(err), requested: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn get(&self, url: &str) -> Result<HttpReply, WeatherError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.reply.clone()
        }
    }

    const SNOWY: &str = r#"{
        "location": {"name": "Oslo", "region": "Oslo", "country": "Norway"},
        "current": {
            "last_updated_epoch": 1544845514,
            "temp_f": 23.0,
            "condition": {"text": "Heavy snow", "code": 1225},
            "wind_mph": 5.0,
            "wind_degree": 350,
            "pressure_mb": 1002.0,
            "humidity": 88,
            "cloud": 75
        }
    }"#;

    #[test]
    fn builder_urls() {
        for (expected, provider, description) in [
            ("key=foo&q=29617", ApixuProvider::new("foo").query("29617"), "Zip code"),
            ("key=foo&q=Paris", ApixuProvider::new("foo").query("Paris"), "City name"),
            (
                "key=foo&q=145.77%2C-16.92",
                ApixuProvider::new("foo").query("145.77,-16.92"),
                "Latitude and Longitude",
            ),
            ("key=foo&q=metar%3AEGLL", ApixuProvider::new("foo").query("metar:EGLL"), "METAR"),
            ("key=foo&q=iata%3ADXB", ApixuProvider::new("foo").query("iata:DXB"), "IATA"),
            ("key=foo&q=100.0.0.1", ApixuProvider::new("foo").query("100.0.0.1"), "IP lookup"),
            ("key=foo&q=auto%3Aip", ApixuProvider::new("foo").query("auto:ip"), "Auto IP lookup"),
        ] {
            let expected = format!("http://api.apixu.com/v1/current.json?{expected}");
            assert_eq!(provider.url(), expected, "{description}");
        }
    }

    #[test]
    fn query_does_not_mutate_receiver() {
        let base = ApixuProvider::new("foo");
        let before = base.url();

        let paris = base.query("Paris");
        let zip = base.query("29617");

        assert_eq!(base.url(), before);
        assert_eq!(base.location(), DEFAULT_LOCATION);
        assert_eq!(paris.location(), "Paris");
        assert_eq!(zip.location(), "29617");
        assert_ne!(paris.url(), zip.url());
    }

    #[test]
    fn with_endpoint_keeps_key_and_location() {
        let p = ApixuProvider::new("foo").query("Paris");
        let local = p.with_endpoint("http://localhost:8080/current.json");

        assert_eq!(p.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(local.url(), "http://localhost:8080/current.json?key=foo&q=Paris");
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let provider = ApixuProvider::new("s3cr3t-key").query("Paris");
        let out = format!("{provider:?}");

        assert!(!out.contains("s3cr3t-key"), "{out}");
        assert!(out.contains("<redacted>"));
        assert!(out.contains("Paris"));
    }

    #[tokio::test]
    async fn fetches_built_url_and_translates() {
        let transport = CannedTransport::new(200, SNOWY);
        let provider = ApixuProvider::new("k").query("Oslo").with_transport(transport.clone());

        let weather = provider.get_weather().await.unwrap();
        assert_eq!(weather.location, "Oslo, Oslo, Norway");
        assert_eq!(weather.condition, Condition::Snow);
        assert_eq!(weather.humidity, 0.88);
        assert_eq!(weather.cloud_cover, 0.75);

        let requested = transport.requested.lock().unwrap();
        assert_eq!(*requested, vec![provider.url()]);
    }

    #[tokio::test]
    async fn classification_runs_before_translation() {
        let transport = CannedTransport::new(401, SNOWY);
        let provider = ApixuProvider::new("k").with_transport(transport);

        let err = provider.get_weather().await.unwrap_err();
        assert!(matches!(err, WeatherError::AuthenticationFailed(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let transport = CannedTransport::failing(WeatherError::Transport("refused".into()));
        let provider = ApixuProvider::new("k").with_transport(transport);

        assert_eq!(
            provider.get_weather().await,
            Err(WeatherError::Transport("refused".into()))
        );
    }

    #[tokio::test]
    async fn shared_provider_serves_concurrent_calls() {
        let transport = CannedTransport::new(200, SNOWY);
        let provider = ApixuProvider::new("k").with_transport(transport.clone());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let p = provider.clone();
                tokio::spawn(async move { p.get_weather().await })
            })
            .collect();

        for h in handles {
            assert!(h.await.unwrap().is_ok());
        }
        assert_eq!(transport.requested.lock().unwrap().len(), 4);
    }
}
