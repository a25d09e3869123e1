mod client;
mod config;
mod cookie;
mod errors;
mod exchange;
mod register;
mod types;

pub use client::BackendClient;
pub use config::BackendConfig;
pub use cookie::{CookiePair, parse_set_cookie};
pub use errors::{AuthFailure, ExchangeError, RegistrationError};
pub use types::{AuthPayload, Credentials};
