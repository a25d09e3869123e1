use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Registration form as submitted by the browser
#[derive(Clone, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "cPassword")]
    pub c_password: String,
}

impl RegistrationForm {
    /// The part of the form the backend receives; the confirmation stays here
    pub fn to_request(&self) -> RegistrationRequest {
        RegistrationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("c_password", &"[redacted]")
            .finish()
    }
}

/// Body forwarded to the backend registration endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// A failed rule, attached to the form field it concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All failed rules of one form submission, at most one per field, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub(super) fn add(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message attached to `field`, if that field failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}
