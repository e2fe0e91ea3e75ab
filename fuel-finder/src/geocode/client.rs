//! Nominatim reverse-geocoding client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use super::error::GeocodeError;
use super::resolver::ReverseGeocoder;
use super::types::ReverseResponse;

/// Default base URL for the public Nominatim instance.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim rejects requests without an identifying user agent.
const DEFAULT_USER_AGENT: &str = concat!("fuel-finder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL for the service
    pub base_url: String,
    /// Value of the User-Agent header
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a config pointing at the public Nominatim instance.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for Nominatim's `/reverse` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new client.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Invalid User-Agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up the address at a coordinate.
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseResponse, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        debug!(latitude, longitude, "reverse geocoding");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
            message: e.to_string(),
        })
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ReverseResponse, GeocodeError> {
        NominatimClient::reverse(self, latitude, longitude).await
    }
}
