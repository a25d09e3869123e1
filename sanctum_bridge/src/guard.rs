//! Per-request access decision for protected paths

use std::sync::LazyLock;

use crate::session::Token;

/// Path prefixes that require a token, from `PROTECTED_PATH_PREFIXES` (comma-separated)
/// Default: "/dashboard"
pub static PROTECTED_PATH_PREFIXES: LazyLock<Vec<String>> = LazyLock::new(|| {
    parse_prefixes(
        &std::env::var("PROTECTED_PATH_PREFIXES").unwrap_or_else(|_| "/dashboard".to_string()),
    )
});

fn parse_prefixes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decides whether a request may proceed given its path and token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    protected_prefixes: Vec<String>,
}

impl RouteGuard {
    pub fn new<I, S>(protected_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected_prefixes: protected_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(PROTECTED_PATH_PREFIXES.iter().cloned())
    }

    pub fn protected_prefixes(&self) -> &[String] {
        &self.protected_prefixes
    }

    /// Deny only when `path` is under a protected prefix and there is no token
    pub fn is_authorized(&self, path: &str, token: Option<&Token>) -> bool {
        token.is_some() || !self.is_protected(path)
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_env()
    }
}

/// [`RouteGuard::is_authorized`] with the prefixes from the environment
pub fn is_authorized(path: &str, token: Option<&Token>) -> bool {
    RouteGuard::from_env().is_authorized(path, token)
}
