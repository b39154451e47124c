use thiserror::Error;

use crate::utils::UtilError;

/// Failures while *issuing* a session. Verification never produces one of
/// these; forged or malformed tokens come back as `TokenStatus::Invalid`.
#[derive(Debug, Error, Clone)]
pub enum SessionError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),

    #[error("Cookie error: {0}")]
    Cookie(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

impl From<serde_json::Error> for SessionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
