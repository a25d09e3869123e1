use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Email and password submitted by the person logging in
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Body of a successful login response, kept exactly as the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthPayload(Value);

impl AuthPayload {
    /// The `access_token` field, when the backend sent one as a string
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for AuthPayload {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
