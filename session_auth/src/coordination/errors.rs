//! Error types for the coordination layer

use thiserror::Error;

use crate::credential::ValidationError;
use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Errors surfaced by the register/login/logout flows
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// Input rejected before any credential check; the message is client-safe
    #[error("{0}")]
    Validation(String),

    /// Bad credentials. Deliberately carries no detail about which check failed
    #[error("invalid credentials")]
    Unauthorized,

    /// Username already registered
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Error from the user store
    #[error("Database error: {0}")]
    Database(String),

    /// Error from Session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Validation(msg) => tracing::debug!("Validation error: {}", msg),
            Self::Unauthorized => tracing::debug!("Invalid credentials"),
            Self::Conflict(msg) => tracing::debug!("Conflict: {}", msg),
            Self::Database(msg) => tracing::error!("Database error: {}", msg),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

impl From<ValidationError> for CoordinationError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = match err {
            UserError::AlreadyExists(username) => Self::Conflict(username),
            other => Self::Database(other.to_string()),
        };
        error.log()
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        let error = Self::UtilsError(err);
        tracing::error!("{}", error);
        error
    }
}
