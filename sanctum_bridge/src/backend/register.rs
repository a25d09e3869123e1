use http::StatusCode;
use http::header::ACCEPT;

use super::client::BackendClient;
use super::errors::RegistrationError;
use crate::registration::RegistrationRequest;

impl BackendClient {
    /// Forward a registration to the backend unchanged
    ///
    /// Only transport failures are errors; whatever status the backend answers
    /// with is handed back to the caller.
    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<StatusCode, RegistrationError> {
        let url = self.config.register_url()?;

        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Registration request failed: {e}");
                RegistrationError::Transport(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Registration forwarded, backend status {status}");
        } else {
            tracing::warn!("Backend answered registration with status {status}");
        }
        Ok(status)
    }
}
