use http::{HeaderMap, StatusCode};
use std::sync::Arc;

use crate::backend::{BackendClient, Credentials};
use crate::guard::RouteGuard;
use crate::registration::{RegistrationForm, validate_registration};
use crate::session::{
    InMemoryTokenStore, Session, SessionConfig, SessionError, StoredToken, Token, TokenStore,
    expired_session_cookie, session_cookie, session_id_from_headers,
};
use crate::utils::gen_random_string;

use super::errors::BridgeError;

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Id under which the token was stored
    pub session_id: String,
    pub session: Session,
    /// `Set-Cookie` headers carrying the session id to the browser
    pub headers: HeaderMap,
}

/// Ties the backend client, the token store and the route guard together
///
/// This is the session read/write surface for the rest of the application:
/// `login` and `logout` write, `get_token` and `get_session` read.
pub struct AuthBridge {
    backend: BackendClient,
    store: Arc<dyn TokenStore>,
    session_config: SessionConfig,
    guard: RouteGuard,
}

impl AuthBridge {
    pub fn new(
        backend: BackendClient,
        store: Arc<dyn TokenStore>,
        session_config: SessionConfig,
        guard: RouteGuard,
    ) -> Self {
        Self {
            backend,
            store,
            session_config,
            guard,
        }
    }

    /// Bridge configured from the environment, keeping tokens in memory
    pub fn from_env() -> Result<Self, BridgeError> {
        Ok(Self::new(
            BackendClient::from_env()?,
            Arc::new(InMemoryTokenStore::new()),
            SessionConfig::from_env(),
            RouteGuard::from_env(),
        ))
    }

    pub fn backend(&self) -> &BackendClient {
        &self.backend
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.session_config
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    /// Exchange credentials with the backend and open a session on success
    ///
    /// Any token held under `current_session_id` is dropped first, so a failed
    /// login never leaves an older token behind and a successful one always
    /// gets a fresh session id.
    #[tracing::instrument(skip(self, credentials, current_session_id))]
    pub async fn login(
        &self,
        credentials: &Credentials,
        current_session_id: Option<&str>,
    ) -> Result<LoginOutcome, BridgeError> {
        if let Some(session_id) = current_session_id {
            self.store.remove(session_id).await?;
        }

        let payload = self.backend.exchange(credentials).await?;
        let token = Token::from(payload);
        let session = token.to_session();

        let session_id = gen_random_string(32).map_err(SessionError::from)?;
        self.store
            .put(
                &session_id,
                StoredToken::new(token, self.session_config.max_age),
            )
            .await?;

        let headers = session_cookie(&self.session_config, &session_id)?;
        tracing::debug!("Session opened for bridged login");

        Ok(LoginOutcome {
            session_id,
            session,
            headers,
        })
    }

    pub async fn get_token(&self, session_id: &str) -> Result<Option<Token>, BridgeError> {
        Ok(self.store.get(session_id).await?.map(|stored| stored.token))
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Option<Session>, BridgeError> {
        Ok(self
            .get_token(session_id)
            .await?
            .map(|token| token.to_session()))
    }

    /// Drop the session's token and return headers that expire the session cookie
    pub async fn logout(&self, session_id: Option<&str>) -> Result<HeaderMap, BridgeError> {
        if let Some(session_id) = session_id {
            self.store.remove(session_id).await?;
        }
        Ok(expired_session_cookie(&self.session_config)?)
    }

    /// Session id from the request's `Cookie` headers
    ///
    /// Unreadable cookie headers count as no session.
    pub fn session_id_from_headers<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        session_id_from_headers(headers, &self.session_config.cookie_name)
    }

    pub async fn token_from_headers(
        &self,
        headers: &HeaderMap,
    ) -> Result<Option<Token>, BridgeError> {
        match self.session_id_from_headers(headers) {
            Some(session_id) => self.get_token(session_id).await,
            None => Ok(None),
        }
    }

    /// Route guard decision for a request, with the token it was based on
    pub async fn authorize(
        &self,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<(bool, Option<Token>), BridgeError> {
        if !self.guard.is_protected(path) {
            return Ok((true, None));
        }
        let token = self.token_from_headers(headers).await?;
        let allowed = self.guard.is_authorized(path, token.as_ref());
        Ok((allowed, token))
    }

    /// Validate a registration form and forward it to the backend
    ///
    /// Returns the backend's status. Nothing is sent when validation fails.
    #[tracing::instrument(skip(self, form))]
    pub async fn register(&self, form: &RegistrationForm) -> Result<StatusCode, BridgeError> {
        validate_registration(form)?;
        Ok(self.backend.register(&form.to_request()).await?)
    }
}
