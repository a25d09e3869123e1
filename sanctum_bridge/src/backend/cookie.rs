use http::header::{HeaderMap, SET_COOKIE};

/// Separator between cookie directives in a combined `Set-Cookie` value
const COOKIE_SEPARATOR: &str = ", ";

/// Session key and XSRF token issued by the backend for one login attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookiePair {
    pub session_key: Option<String>,
    pub xsrf_token: Option<String>,
}

impl CookiePair {
    fn is_complete(&self) -> bool {
        self.session_key.is_some() && self.xsrf_token.is_some()
    }

    /// Scan the `Set-Cookie` headers of a response, in the order they were received
    pub(super) fn from_headers(
        headers: &HeaderMap,
        session_cookie: &str,
        xsrf_cookie: &str,
    ) -> Self {
        let directives: Vec<&str> = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();

        if directives.is_empty() {
            tracing::debug!("No Set-Cookie header in cookie issuance response");
            return Self::default();
        }

        parse_set_cookie(
            &directives.join(COOKIE_SEPARATOR),
            session_cookie,
            xsrf_cookie,
        )
    }

    /// XSRF token as the backend expects it in the request header
    ///
    /// The cookie carries the token percent-encoded; the header carries it decoded.
    pub(super) fn xsrf_header_value(&self) -> Option<String> {
        self.xsrf_token.as_deref().map(|raw| {
            urlencoding::decode(raw)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
    }
}

/// Extract the session key and XSRF token from a raw `Set-Cookie` header value
///
/// The value is split into directives on `", "`. The first directive starting
/// with `<session_cookie>=` and the first starting with `<xsrf_cookie>=` win;
/// scanning stops once both are found. The value of a directive ends at the
/// first `;`. Missing cookies are left as `None`.
pub fn parse_set_cookie(raw: &str, session_cookie: &str, xsrf_cookie: &str) -> CookiePair {
    let session_prefix = format!("{session_cookie}=");
    let xsrf_prefix = format!("{xsrf_cookie}=");
    let mut pair = CookiePair::default();

    for directive in raw.split(COOKIE_SEPARATOR).map(str::trim_start) {
        if pair.session_key.is_none() {
            if let Some(rest) = directive.strip_prefix(&session_prefix) {
                pair.session_key = Some(directive_value(rest));
            }
        }
        if pair.xsrf_token.is_none() {
            if let Some(rest) = directive.strip_prefix(&xsrf_prefix) {
                pair.xsrf_token = Some(directive_value(rest));
            }
        }
        if pair.is_complete() {
            break;
        }
    }

    tracing::debug!(
        "Cookie scan: session key found: {}, xsrf token found: {}",
        pair.session_key.is_some(),
        pair.xsrf_token.is_some()
    );
    pair
}

fn directive_value(rest: &str) -> String {
    rest.split(';').next().unwrap_or_default().trim().to_string()
}
