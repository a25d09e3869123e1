use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

use super::errors::ExchangeError;

pub(super) static BACKEND_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost".to_string())
});

pub(super) static BACKEND_CSRF_COOKIE_PATH: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BACKEND_CSRF_COOKIE_PATH")
        .unwrap_or_else(|_| "/sanctum/csrf-cookie".to_string())
});

pub(super) static BACKEND_LOGIN_PATH: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BACKEND_LOGIN_PATH").unwrap_or_else(|_| "/api/login".to_string())
});

pub(super) static BACKEND_REGISTER_PATH: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BACKEND_REGISTER_PATH").unwrap_or_else(|_| "/api/register".to_string())
});

pub(super) static BACKEND_SESSION_COOKIE: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BACKEND_SESSION_COOKIE").unwrap_or_else(|_| "laravel_session".to_string())
});

pub(super) static BACKEND_XSRF_COOKIE: LazyLock<String> = LazyLock::new(|| {
    std::env::var("BACKEND_XSRF_COOKIE").unwrap_or_else(|_| "XSRF-TOKEN".to_string())
});

pub(super) static BACKEND_TIMEOUT_SECS: LazyLock<u64> =
    LazyLock::new(|| parse_timeout_secs(std::env::var("BACKEND_TIMEOUT_SECS").ok().as_deref()));

fn parse_timeout_secs(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(30)
}

/// Header carrying the XSRF token on the login request
pub(super) const XSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";

/// Location and cookie names of the external login backend
///
/// Endpoint paths are resolved against `base_url`, so they should be absolute
/// (start with `/`).
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: Url,
    pub csrf_cookie_path: String,
    pub login_path: String,
    pub register_path: String,
    pub session_cookie_name: String,
    pub xsrf_cookie_name: String,
    pub timeout: Duration,
}

impl BackendConfig {
    /// Configuration for a backend at `base_url` with the default Sanctum paths and cookie names
    pub fn new(base_url: &str) -> Result<Self, ExchangeError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ExchangeError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            base_url,
            csrf_cookie_path: "/sanctum/csrf-cookie".to_string(),
            login_path: "/api/login".to_string(),
            register_path: "/api/register".to_string(),
            session_cookie_name: "laravel_session".to_string(),
            xsrf_cookie_name: "XSRF-TOKEN".to_string(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Configuration read from `BACKEND_*` environment variables
    pub fn from_env() -> Result<Self, ExchangeError> {
        let base_url = Url::parse(BACKEND_URL.as_str())
            .map_err(|e| ExchangeError::InvalidUrl(format!("BACKEND_URL: {e}")))?;
        Ok(Self {
            base_url,
            csrf_cookie_path: BACKEND_CSRF_COOKIE_PATH.to_string(),
            login_path: BACKEND_LOGIN_PATH.to_string(),
            register_path: BACKEND_REGISTER_PATH.to_string(),
            session_cookie_name: BACKEND_SESSION_COOKIE.to_string(),
            xsrf_cookie_name: BACKEND_XSRF_COOKIE.to_string(),
            timeout: Duration::from_secs(*BACKEND_TIMEOUT_SECS),
        })
    }

    pub(super) fn endpoint(&self, path: &str) -> Result<Url, ExchangeError> {
        self.base_url
            .join(path)
            .map_err(|e| ExchangeError::InvalidUrl(format!("{path}: {e}")))
    }

    pub(super) fn csrf_cookie_url(&self) -> Result<Url, ExchangeError> {
        self.endpoint(&self.csrf_cookie_path)
    }

    pub(super) fn login_url(&self) -> Result<Url, ExchangeError> {
        self.endpoint(&self.login_path)
    }

    pub(super) fn register_url(&self) -> Result<Url, ExchangeError> {
        self.endpoint(&self.register_path)
    }
}
