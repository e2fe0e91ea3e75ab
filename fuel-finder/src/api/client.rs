//! Station search backend client.

use tracing::debug;

use crate::domain::{SearchParams, StationResult};
use crate::search::StationSearch;

use super::deployment::Deployment;
use super::error::ApiError;

/// Configuration for the station search client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Create a config for the given deployment.
    ///
    /// Price calculation needs one route lookup per station on the
    /// backend, so the timeout is generous.
    pub fn new(deployment: &Deployment) -> Self {
        Self {
            base_url: deployment.base_url(),
            timeout_secs: 120,
        }
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the station search backend.
#[derive(Debug, Clone)]
pub struct StationApiClient {
    http: reqwest::Client,
    search_url: String,
}

impl StationApiClient {
    /// Create a new client.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            search_url: format!("{}/", config.base_url.trim_end_matches('/')),
        })
    }

    /// The URL searches are posted to.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Post `params` as the request body and return the priced stations.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<StationResult>, ApiError> {
        debug!(url = %self.search_url, origin = %params.origin, "searching stations");

        let response = self.http.post(&self.search_url).json(params).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ApiError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl StationSearch for StationApiClient {
    async fn search(&self, params: &SearchParams) -> Result<Vec<StationResult>, ApiError> {
        StationApiClient::search(self, params).await
    }
}
