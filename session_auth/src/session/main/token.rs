//! Compact signed token codec
//!
//! Wire format: `base64url(json) "." base64url(hmac_sha256(secret, base64url(json)))`.
//! The MAC covers the *encoded* body string, so verification never re-encodes
//! the payload. Changing that ordering would invalidate every issued token.

use hmac::{Hmac, Mac};
use serde::{Serialize, de::DeserializeOwned};
use sha2::Sha256;

use crate::config::SessionSecret;
use crate::session::{errors::SessionError, types::TokenStatus};
use crate::utils::{base64url_decode, base64url_encode};

use super::super::common::now_secs;

type HmacSha256 = Hmac<Sha256>;

fn signer(secret: &SessionSecret) -> Result<HmacSha256, SessionError> {
    HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| SessionError::Crypto("Failed to initialize HMAC".to_string()))
}

/// Serializes and signs `payload`.
pub fn encode_token<T: Serialize>(secret: &SessionSecret, payload: &T) -> Result<String, SessionError> {
    let body = serde_json::to_vec(payload)?;
    let body_b64 = base64url_encode(body);

    let mut mac = signer(secret)?;
    mac.update(body_b64.as_bytes());
    let sig_b64 = base64url_encode(mac.finalize().into_bytes());

    Ok(format!("{body_b64}.{sig_b64}"))
}

/// Verifies and decodes `token` against the current time.
pub fn decode_token<T: DeserializeOwned>(secret: &SessionSecret, token: &str) -> TokenStatus<T> {
    decode_token_at(secret, token, now_secs())
}

/// Verifies and decodes `token` as of `now` (seconds since the epoch).
///
/// A payload carrying an `exp` field is rejected once `now >= exp`; a
/// non-numeric `exp` is rejected outright. Payloads without `exp` never expire
/// at this layer.
pub fn decode_token_at<T: DeserializeOwned>(
    secret: &SessionSecret,
    token: &str,
    now: f64,
) -> TokenStatus<T> {
    if token.is_empty() {
        return TokenStatus::Invalid;
    }
    let Some((body_b64, sig_b64)) = token.split_once('.') else {
        tracing::debug!("Token has no separator");
        return TokenStatus::Invalid;
    };

    let Ok(signature) = base64url_decode(sig_b64) else {
        tracing::debug!("Token signature is not base64url");
        return TokenStatus::Invalid;
    };
    let Ok(mut mac) = signer(secret) else {
        return TokenStatus::Invalid;
    };
    mac.update(body_b64.as_bytes());
    if mac.verify_slice(&signature).is_err() {
        tracing::debug!("Token signature mismatch");
        return TokenStatus::Invalid;
    }

    let value: serde_json::Value = match base64url_decode(body_b64)
        .ok()
        .and_then(|body| serde_json::from_slice(&body).ok())
    {
        Some(value) => value,
        None => {
            tracing::debug!("Token body is not valid base64url JSON");
            return TokenStatus::Invalid;
        }
    };

    if let Some(exp) = value.get("exp") {
        match exp.as_f64() {
            Some(exp) if now < exp => {}
            Some(exp) => {
                tracing::debug!(exp, now, "Token expired");
                return TokenStatus::Invalid;
            }
            None => {
                tracing::debug!("Token exp is not a number");
                return TokenStatus::Invalid;
            }
        }
    }

    match serde_json::from_value(value) {
        Ok(payload) => TokenStatus::Valid(payload),
        Err(e) => {
            tracing::debug!("Token payload has unexpected shape: {}", e);
            TokenStatus::Invalid
        }
    }
}
