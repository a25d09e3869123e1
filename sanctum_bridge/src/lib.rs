//! sanctum_bridge - Session bridging for cookie-based Sanctum login backends
//!
//! This crate obtains a CSRF/session cookie pair from an external backend,
//! forwards the user's credentials with those cookies, and maps the backend's
//! answer into a token owned by the application session.

mod backend;
mod config;
mod coordination;
mod guard;
mod registration;
mod session;
mod utils;

pub use backend::{
    AuthFailure, AuthPayload, BackendClient, BackendConfig, CookiePair, Credentials,
    ExchangeError, RegistrationError, parse_set_cookie,
};

pub use config::BRIDGE_ROUTE_PREFIX;

pub use coordination::{AuthBridge, BridgeError, LoginOutcome};

pub use guard::{PROTECTED_PATH_PREFIXES, RouteGuard, is_authorized};

pub use registration::{
    FieldError, RegistrationForm, RegistrationRequest, ValidationErrors, validate_registration,
};

pub use session::{
    InMemoryTokenStore, SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, Session, SessionConfig,
    SessionError, StoreError, StoredToken, Token, TokenStore,
};

pub use utils::UtilError;
