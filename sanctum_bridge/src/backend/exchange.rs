use http::header::{ACCEPT, COOKIE};

use super::client::BackendClient;
use super::config::XSRF_HEADER_NAME;
use super::cookie::CookiePair;
use super::errors::{AuthFailure, ExchangeError};
use super::types::{AuthPayload, Credentials};

impl BackendClient {
    /// Exchange credentials for the backend's authentication result
    ///
    /// Fetches a fresh cookie pair from the cookie-issuance endpoint, then posts
    /// the credentials to the login endpoint with those cookies. The two calls
    /// always run in that order.
    ///
    /// # Returns
    /// * `Ok(AuthPayload)` - the login response body, unchanged
    /// * `Err(AuthFailure::Declined)` - the login endpoint answered non-2xx
    /// * `Err(AuthFailure::Unavailable)` - transport failure or a body that is not JSON
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn exchange(&self, credentials: &Credentials) -> Result<AuthPayload, AuthFailure> {
        let cookies = self.fetch_cookie_pair().await.map_err(|e| {
            tracing::error!("Cookie issuance request failed: {e}");
            AuthFailure::Unavailable
        })?;

        let response = self.send_login(&cookies, credentials).await.map_err(|e| {
            tracing::error!("Login request failed: {e}");
            AuthFailure::Unavailable
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Login declined by backend with status {status}");
            return Err(AuthFailure::Declined { status });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(ExchangeError::from)
            .map_err(|e| {
                tracing::error!("Login response could not be read: {e}");
                AuthFailure::Unavailable
            })?;

        tracing::debug!("Login accepted by backend");
        Ok(AuthPayload::from(body))
    }

    async fn fetch_cookie_pair(&self) -> Result<CookiePair, ExchangeError> {
        let url = self.config.csrf_cookie_url()?;
        tracing::debug!("Requesting cookie pair from {url}");

        let response = self.http.get(url).send().await?;

        Ok(CookiePair::from_headers(
            response.headers(),
            &self.config.session_cookie_name,
            &self.config.xsrf_cookie_name,
        ))
    }

    async fn send_login(
        &self,
        cookies: &CookiePair,
        credentials: &Credentials,
    ) -> Result<reqwest::Response, ExchangeError> {
        let url = self.config.login_url()?;

        // The session cookie is always sent, empty when the backend issued none
        let session_cookie = format!(
            "{}={}",
            self.config.session_cookie_name,
            cookies.session_key.as_deref().unwrap_or_default()
        );

        let mut request = self
            .http
            .post(url)
            .header(COOKIE, session_cookie)
            .header(ACCEPT, "application/json")
            .json(credentials);

        if let Some(xsrf_token) = cookies.xsrf_header_value() {
            request = request.header(XSRF_HEADER_NAME, xsrf_token);
        }

        Ok(request.send().await?)
    }
}
