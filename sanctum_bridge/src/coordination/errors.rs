//! Error types for the coordination layer

use thiserror::Error;

use crate::backend::{AuthFailure, ExchangeError, RegistrationError};
use crate::registration::ValidationErrors;
use crate::session::{SessionError, StoreError};

/// Errors that can occur while bridging logins, sessions and registrations
#[derive(Error, Debug, Clone)]
pub enum BridgeError {
    /// The backend did not authenticate the credentials
    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthFailure),

    /// The registration form broke at least one rule; nothing was sent
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// The registration could not be forwarded
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    /// Error from session operations
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// The bridge could not be set up
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<StoreError> for BridgeError {
    fn from(err: StoreError) -> Self {
        Self::Session(SessionError::Storage(err))
    }
}

impl From<ExchangeError> for BridgeError {
    fn from(err: ExchangeError) -> Self {
        Self::Configuration(err.to_string())
    }
}
