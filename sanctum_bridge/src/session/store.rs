use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::errors::StoreError;
use super::types::StoredToken;

/// Storage for bridged tokens, keyed by session id
///
/// Implementations must not return expired tokens from `get`.
#[async_trait]
pub trait TokenStore: Send + Sync + 'static {
    /// Get the token stored for a session id.
    async fn get(&self, session_id: &str) -> Result<Option<StoredToken>, StoreError>;

    /// Store a token for a session id, replacing any previous one.
    async fn put(&self, session_id: &str, token: StoredToken) -> Result<(), StoreError>;

    /// Remove the token for a session id. Removing a missing id is not an error.
    async fn remove(&self, session_id: &str) -> Result<(), StoreError>;
}

/// Process-local token store
#[derive(Default)]
pub struct InMemoryTokenStore {
    entry: Mutex<HashMap<String, StoredToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory token store");
        Self::default()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self, session_id: &str) -> Result<Option<StoredToken>, StoreError> {
        let mut entry = self.entry.lock().await;

        match entry.get(session_id) {
            Some(stored) if stored.is_expired() => {
                tracing::debug!("Token expired at {}, evicting", stored.expires_at);
                entry.remove(session_id);
                Ok(None)
            }
            Some(stored) => Ok(Some(stored.clone())),
            None => Ok(None),
        }
    }

    /// Also sweeps every expired entry, so abandoned sessions do not pile up
    async fn put(&self, session_id: &str, token: StoredToken) -> Result<(), StoreError> {
        let mut entry = self.entry.lock().await;

        let before = entry.len();
        entry.retain(|_, stored| !stored.is_expired());
        let swept = before - entry.len();
        if swept > 0 {
            tracing::debug!("Swept {swept} expired token(s)");
        }

        entry.insert(session_id.to_string(), token);
        Ok(())
    }

    async fn remove(&self, session_id: &str) -> Result<(), StoreError> {
        self.entry.lock().await.remove(session_id);
        Ok(())
    }
}
