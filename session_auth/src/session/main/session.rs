use crate::config::AuthConfig;
use crate::session::config::SESSION_COOKIE_NAME;
use crate::session::errors::SessionError;
use crate::session::types::{SessionClaims, SessionIdentity, TokenStatus};

use super::super::common::now_secs;
use super::cookie::read_cookie;
use super::token::{decode_token_at, encode_token};

/// Issues a signed session token for `username`, valid for `config.session_ttl` seconds.
pub fn issue_session_token(config: &AuthConfig, username: &str) -> Result<String, SessionError> {
    issue_session_token_at(config, username, now_secs())
}

pub(crate) fn issue_session_token_at(
    config: &AuthConfig,
    username: &str,
    now: f64,
) -> Result<String, SessionError> {
    let claims = SessionClaims::new(username, now, config.session_ttl);
    encode_token(&config.secret, &claims)
}

/// Verifies a raw token and returns the identity it carries.
///
/// Returns `None` for anything that is not a valid, unexpired token naming a user.
pub fn authenticate(config: &AuthConfig, raw_token: &str) -> Option<SessionIdentity> {
    authenticate_at(config, raw_token, now_secs())
}

pub(crate) fn authenticate_at(
    config: &AuthConfig,
    raw_token: &str,
    now: f64,
) -> Option<SessionIdentity> {
    match decode_token_at::<SessionClaims>(&config.secret, raw_token, now) {
        TokenStatus::Valid(SessionClaims { u: Some(username), .. }) => {
            Some(SessionIdentity { username })
        }
        TokenStatus::Valid(_) => {
            tracing::debug!("Verified token carries no username");
            None
        }
        TokenStatus::Invalid => None,
    }
}

/// Extracts the session cookie from a raw `Cookie` header and verifies it.
pub fn authenticate_cookie_header(
    config: &AuthConfig,
    cookie_header: Option<&str>,
) -> Option<SessionIdentity> {
    let Some(token) = read_cookie(cookie_header, SESSION_COOKIE_NAME) else {
        tracing::debug!("No session cookie '{}' found in cookies", SESSION_COOKIE_NAME);
        return None;
    };
    authenticate(config, &token)
}
