//! Runtime configuration for session authentication
//!
//! Everything the core needs at request time lives in [`AuthConfig`], which is
//! built once at startup and passed explicitly into each operation.

use std::env;
use std::fmt;

use thiserror::Error;

use crate::session::DEFAULT_SESSION_TTL;

/// Mount point of the auth endpoints. Default: "/api/auth"
pub const DEFAULT_AUTH_ROUTE_PREFIX: &str = "/api/auth";

/// HMAC key material. The raw UTF-8 bytes of the configured secret are used
/// directly as the key, with no stretching.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionSecret(Vec<u8>);

impl SessionSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into().into_bytes())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SessionSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionSecret(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Signing secret; rotating it invalidates every outstanding token
    pub secret: SessionSecret,
    /// Token lifetime in seconds, also used as the cookie Max-Age
    pub session_ttl: u64,
    /// `Secure` cookie attribute when the request gives no scheme hint
    pub secure_cookie: bool,
}

impl AuthConfig {
    /// Config with the default 30-day TTL and non-secure fallback transport.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SessionSecret::new(secret),
            session_ttl: DEFAULT_SESSION_TTL,
            secure_cookie: false,
        }
    }

    pub fn with_session_ttl(mut self, ttl: u64) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn with_secure_cookie(mut self, secure: bool) -> Self {
        self.secure_cookie = secure;
        self
    }

    /// Reads `AUTH_SERVER_SECRET`, `SESSION_TOKEN_TTL` and `SESSION_COOKIE_SECURE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup("AUTH_SERVER_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let session_ttl = match lookup("SESSION_TOKEN_TTL") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("SESSION_TOKEN_TTL must be seconds, got '{raw}'"))
            })?,
            None => DEFAULT_SESSION_TTL,
        };

        let secure_cookie = lookup("SESSION_COOKIE_SECURE")
            .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
            .unwrap_or(false);

        if secret.len() < 32 {
            tracing::warn!("AUTH_SERVER_SECRET is shorter than 32 bytes; use a high-entropy value");
        }

        Ok(Self {
            secret: SessionSecret::new(secret),
            session_ttl,
            secure_cookie,
        })
    }
}

#[derive(Debug, Error, Clone)]
pub enum ConfigError {
    #[error("AUTH_SERVER_SECRET must be set to a non-empty value")]
    MissingSecret,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
