use http::StatusCode;
use thiserror::Error;

/// Outcome of a credential exchange that did not authenticate the user
///
/// Both variants are shown to end users as the same generic message; the
/// distinction only exists for logging and for callers that need the status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// The login endpoint answered with a non-success status
    #[error("Authentication declined with status {status}")]
    Declined { status: StatusCode },

    /// The backend could not be reached or answered with something unusable
    #[error("Authentication could not be completed")]
    Unavailable,
}

impl AuthFailure {
    /// Status code returned by the login endpoint, if it answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AuthFailure::Declined { status } => Some(*status),
            AuthFailure::Unavailable => None,
        }
    }

    /// Message safe to show to the person trying to log in
    pub fn user_message(&self) -> &'static str {
        "Authentication failed"
    }
}

/// Low-level failures while talking to the backend
#[derive(Debug, Error, Clone)]
pub enum ExchangeError {
    #[error("Invalid backend url: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Error, Clone)]
pub enum RegistrationError {
    #[error("Registration could not be forwarded: {0}")]
    Transport(String),

    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),
}
