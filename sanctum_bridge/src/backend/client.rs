use std::time::Duration;

use super::config::BackendConfig;
use super::errors::ExchangeError;

/// HTTP client for the external login backend
///
/// Holds one pooled `reqwest::Client`; cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct BackendClient {
    pub(super) http: reqwest::Client,
    pub(super) config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, ExchangeError> {
        let http = build_http_client(config.timeout)?;
        Ok(Self { http, config })
    }

    /// Client configured from `BACKEND_*` environment variables
    pub fn from_env() -> Result<Self, ExchangeError> {
        Self::new(BackendConfig::from_env()?)
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

/// Creates the HTTP client used for backend calls:
///
/// - `timeout`: applied to each request independently. There are no retries.
/// - `pool_idle_timeout`: 90 seconds before an idle connection is dropped.
/// - `pool_max_idle_per_host`: 32 idle connections kept per host.
///
/// Cookies are never stored by the client; each login attempt carries its own.
fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ExchangeError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .map_err(|e| ExchangeError::HttpClient(e.to_string()))
}
