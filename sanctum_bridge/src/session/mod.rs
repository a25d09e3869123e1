mod config;
mod cookie;
mod errors;
mod store;
mod types;

pub use config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SessionConfig};
pub use errors::{SessionError, StoreError};
pub use store::{InMemoryTokenStore, TokenStore};
pub use types::{Session, StoredToken, Token};

pub(crate) use cookie::{expired_session_cookie, session_cookie, session_id_from_headers};
