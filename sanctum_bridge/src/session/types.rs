use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::AuthPayload;

/// Authenticated user and access token carried across requests
///
/// Created from a successful credential exchange. `user` is the full login
/// payload; `access_token` is its `access_token` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub user: Value,
    pub access_token: Option<String>,
}

impl Token {
    pub fn from_payload(payload: &AuthPayload) -> Self {
        Self {
            access_token: payload.access_token().map(str::to_string),
            user: payload.as_value().clone(),
        }
    }

    /// Project the token into the session shape handed to the rest of the application
    pub fn to_session(&self) -> Session {
        Session::from(self)
    }
}

impl From<AuthPayload> for Token {
    fn from(payload: AuthPayload) -> Self {
        let access_token = payload.access_token().map(str::to_string);
        Self {
            access_token,
            user: payload.into_value(),
        }
    }
}

/// Externally visible session, always derived from a [`Token`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub user: Value,
}

impl From<&Token> for Session {
    fn from(token: &Token) -> Self {
        Self {
            access_token: token.access_token.clone(),
            user: token.user.clone(),
        }
    }
}

/// What a token store keeps for one session id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: Token,
    pub expires_at: DateTime<Utc>,
    pub ttl: u64,
}

impl StoredToken {
    pub fn new(token: Token, ttl: u64) -> Self {
        Self {
            token,
            expires_at: expiry_after(ttl),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// `ttl` seconds from now, saturating at the latest representable instant
fn expiry_after(ttl: u64) -> DateTime<Utc> {
    i64::try_from(ttl)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
