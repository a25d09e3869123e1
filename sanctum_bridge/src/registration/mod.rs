mod types;
mod validation;

pub use types::{FieldError, RegistrationForm, RegistrationRequest, ValidationErrors};
pub use validation::validate_registration;
