use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

#[derive(Debug, Error, Clone)]
pub enum StoreError {
    #[error("Token store unavailable: {0}")]
    Unavailable(String),
}
