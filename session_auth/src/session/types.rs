use serde::{Deserialize, Serialize};

/// Outcome of verifying a signed token.
///
/// There is deliberately a single failure variant: bad signature, malformed
/// body and expiry are indistinguishable to callers.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenStatus<T> {
    Valid(T),
    Invalid,
}

impl<T> TokenStatus<T> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn into_valid(self) -> Option<T> {
        match self {
            Self::Valid(payload) => Some(payload),
            Self::Invalid => None,
        }
    }
}

/// Session token payload: `{u, iat, exp}` in seconds since the epoch.
///
/// Times are floats so tokens carrying fractional timestamps verify too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u: Option<String>,
    #[serde(default)]
    pub iat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
}

impl SessionClaims {
    pub fn new(username: &str, iat: f64, ttl: u64) -> Self {
        Self {
            u: Some(username.to_string()),
            iat,
            exp: Some(iat + ttl as f64),
        }
    }
}

/// The identity behind a verified session, valid for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionIdentity {
    pub username: String,
}
