//! Paris open-data station availability client.

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::error::FetchError;
use super::types::{ProbeResponse, RawStation, RecordsResponse};

/// Default endpoint: real-time availability records of the Vélib' network.
pub const DEFAULT_BASE_URL: &str = "https://opendata.paris.fr/api/explore/v2.1/catalog/datasets/velib-disponibilite-en-temps-reel/records";

/// Default number of rows per fetch.
pub const DEFAULT_LIMIT: usize = 100;

/// Fields requested from the provider, in `select` syntax.
pub const STATION_FIELDS: &str = "stationcode,name,capacity,ebike,mechanical,is_installed,is_renting,is_returning,coordonnees_geo";

/// Fields requested by a connectivity probe.
const PROBE_FIELDS: &str = "stationcode,name";

/// Configuration for the station client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Optional token sent as `Authorization: Bearer <token>`
    pub api_key: Option<String>,
    /// Records endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create an unauthenticated config for the public endpoint.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
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

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    /// HTTP status returned by the provider
    pub status: u16,
    /// Number of stations the provider reports, if it says
    pub total_count: Option<u64>,
}

/// Client for the station availability dataset.
///
/// Each call is a single GET; there is no retry and no caching.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a new station client.
    pub fn new(config: StationClientConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| FetchError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The records endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch up to `limit` station rows.
    ///
    /// Rows are returned as the provider sent them; bikes are not synthesized
    /// here.
    pub async fn fetch_stations(&self, limit: usize) -> Result<Vec<RawStation>, FetchError> {
        debug!(url = %self.base_url, limit, "fetching stations");

        let (_, response): (_, RecordsResponse) = self
            .get_records(&[
                ("limit", limit.to_string()),
                ("select", STATION_FIELDS.to_string()),
            ])
            .await?;

        info!(
            rows = response.results.len(),
            total = ?response.total_count,
            "fetched stations"
        );

        Ok(response.results)
    }

    /// Ask for a single row to check that the provider is reachable.
    pub async fn probe(&self) -> Result<ProbeReport, FetchError> {
        let (status, response): (_, ProbeResponse) = self
            .get_records(&[("limit", "1".to_string()), ("select", PROBE_FIELDS.to_string())])
            .await?;

        Ok(ProbeReport {
            status: status.as_u16(),
            total_count: response.total_count,
        })
    }

    async fn get_records<T: DeserializeOwned>(
        &self,
        query: &[(&str, String)],
    ) -> Result<(StatusCode, T), FetchError> {
        let response = self.http.get(&self.base_url).query(query).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FetchError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed = serde_json::from_str(&body).map_err(|e| FetchError::Json {
            message: e.to_string(),
        })?;

        Ok((status, parsed))
    }
}
