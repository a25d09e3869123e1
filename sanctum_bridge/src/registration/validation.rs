use regex::Regex;
use std::sync::LazyLock;

use super::types::{RegistrationForm, ValidationErrors};

const NAME_MIN_CHARS: usize = 5;
const PASSWORD_MIN_CHARS: usize = 8;
const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*";

const NAME_REQUIRED: &str = "Name is required";
const EMAIL_INVALID: &str = "Must be a valid email";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
const PASSWORD_TOO_WEAK: &str =
    "Password must contain at least one number and one special character";
const PASSWORDS_MISMATCH: &str = "Passwords do not match";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex should compile")
});

// regex has no lookahead, so the digit and special character checks are separate
static PASSWORD_CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9!@#$%^&*]+$").expect("password charset regex should compile")
});

/// Check a registration form before anything is sent to the backend
///
/// Fields are checked in form order and each field reports only its first
/// failing rule. The confirmation mismatch is reported on `cPassword`.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if form.name.chars().count() < NAME_MIN_CHARS {
        errors.add("name", NAME_REQUIRED);
    }

    if !valid_email(&form.email) {
        errors.add("email", EMAIL_INVALID);
    }

    if let Some(message) = password_problem(&form.password) {
        errors.add("password", message);
    }

    if form.password != form.c_password {
        errors.add("cPassword", PASSWORDS_MISMATCH);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!("Registration form rejected: {errors:?}");
        Err(errors)
    }
}

fn valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn password_problem(password: &str) -> Option<&'static str> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Some(PASSWORD_TOO_SHORT);
    }

    let allowed_charset = PASSWORD_CHARSET_REGEX.is_match(password);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));

    if allowed_charset && has_digit && has_special {
        None
    } else {
        Some(PASSWORD_TOO_WEAK)
    }
}
