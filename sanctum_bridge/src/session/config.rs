use std::sync::LazyLock;

/// Longest session a browser will honor; `Max-Age` above 400 days is capped by user agents
pub(crate) const MAX_SESSION_MAX_AGE: u64 = 400 * 24 * 60 * 60;

pub static SESSION_COOKIE_NAME: LazyLock<String> =
    LazyLock::new(|| parse_cookie_name(std::env::var("SESSION_COOKIE_NAME").ok()));

pub static SESSION_COOKIE_MAX_AGE: LazyLock<u64> =
    LazyLock::new(|| parse_max_age(std::env::var("SESSION_COOKIE_MAX_AGE").ok()));

fn parse_cookie_name(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| "__Host-BridgeSession".to_string())
}

// Default to 10 minutes if not set or invalid
fn parse_max_age(raw: Option<String>) -> u64 {
    raw.and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(600)
        .min(MAX_SESSION_MAX_AGE)
}

/// Name and lifetime of the cookie that carries the bridge's session id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub max_age: u64,
}

impl SessionConfig {
    /// `max_age` is capped at 400 days
    pub fn new(cookie_name: impl Into<String>, max_age: u64) -> Self {
        if max_age > MAX_SESSION_MAX_AGE {
            tracing::warn!("Session max age {max_age}s capped at {MAX_SESSION_MAX_AGE}s");
        }
        Self {
            cookie_name: cookie_name.into(),
            max_age: max_age.min(MAX_SESSION_MAX_AGE),
        }
    }

    pub fn from_env() -> Self {
        Self::new(SESSION_COOKIE_NAME.as_str(), *SESSION_COOKIE_MAX_AGE)
    }

    /// `Max-Age` attribute value for the session cookie
    pub(crate) fn max_age_secs(&self) -> i64 {
        i64::try_from(self.max_age.min(MAX_SESSION_MAX_AGE)).unwrap_or(i64::MAX)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
