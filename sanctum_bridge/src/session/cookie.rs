use http::header::{COOKIE, HeaderMap};

use super::config::SessionConfig;
use super::errors::SessionError;
use crate::utils::header_set_cookie;

/// Headers that hand a new session id to the browser
pub(crate) fn session_cookie(
    config: &SessionConfig,
    session_id: &str,
) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        &config.cookie_name,
        session_id,
        config.max_age_secs(),
    )?;
    Ok(headers)
}

/// Headers that make the browser drop its session cookie
pub(crate) fn expired_session_cookie(config: &SessionConfig) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &config.cookie_name, "value", -86400)?;
    Ok(headers)
}

/// Read the session id from the request's `Cookie` headers
///
/// HTTP/2 clients may send one `Cookie` field per cookie, so every field is
/// scanned. Fields that are not visible ASCII are skipped; they cannot hold
/// a session id this crate issued.
pub(crate) fn session_id_from_headers<'a>(
    headers: &'a HeaderMap,
    cookie_name: &str,
) -> Option<&'a str> {
    let session_id = headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(s) => Some(s),
            Err(_) => {
                tracing::debug!("Skipping unreadable cookie header");
                None
            }
        })
        .flat_map(|s| s.split(';'))
        .map(str::trim)
        .find_map(|pair| match pair.split_once('=') {
            Some((k, v)) if k == cookie_name => Some(v),
            _ => None,
        });

    if session_id.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    }

    session_id
}
