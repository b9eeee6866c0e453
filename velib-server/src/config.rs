//! Application configuration.
//!
//! Settings are read from the environment once at startup and handed to the
//! components that need them; nothing else in the crate reads the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::stations::{DEFAULT_BASE_URL, DEFAULT_LIMIT, StationClientConfig};

/// Error returned when an environment variable holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {name}: {value:?}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Optional bearer token for the provider (`VELIB_API_KEY`)
    pub api_key: Option<String>,
    /// Records endpoint (`VELIB_BASE_URL`)
    pub base_url: String,
    /// Rows per fetch (`VELIB_LIMIT`)
    pub limit: usize,
    /// Request timeout in seconds (`VELIB_TIMEOUT_SECS`)
    pub timeout_secs: u64,
    /// Web server address (`VELIB_BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Where snapshot files go (`VELIB_SNAPSHOT_DIR`)
    pub snapshot_dir: PathBuf,
    /// Static assets for the web page (`VELIB_STATIC_DIR`)
    pub static_dir: PathBuf,
    /// Serve this snapshot instead of the live API (`VELIB_OFFLINE_SNAPSHOT`)
    pub offline_snapshot: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            limit: DEFAULT_LIMIT,
            timeout_secs: 30,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            snapshot_dir: PathBuf::from("."),
            static_dir: PathBuf::from("static"),
            offline_snapshot: None,
        }
    }
}

impl AppConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`. Unset and empty variables keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            api_key: get("VELIB_API_KEY"),
            base_url: get("VELIB_BASE_URL").unwrap_or(defaults.base_url),
            limit: parse(&get, "VELIB_LIMIT")?.unwrap_or(defaults.limit),
            timeout_secs: parse(&get, "VELIB_TIMEOUT_SECS")?.unwrap_or(defaults.timeout_secs),
            bind_addr: parse(&get, "VELIB_BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            snapshot_dir: get("VELIB_SNAPSHOT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.snapshot_dir),
            static_dir: get("VELIB_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            offline_snapshot: get("VELIB_OFFLINE_SNAPSHOT").map(PathBuf::from),
        })
    }

    /// Client settings derived from this config.
    pub fn client_config(&self) -> StationClientConfig {
        let config = StationClientConfig::new()
            .with_base_url(&self.base_url)
            .with_timeout(self.timeout_secs);
        match &self.api_key {
            Some(key) => config.with_api_key(key),
            None => config,
        }
    }
}

fn parse<T, G>(get: &G, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    get(name)
        .map(|value| {
            value.trim().parse().map_err(|_| ConfigError {
                name,
                value: value.clone(),
            })
        })
        .transpose()
}
