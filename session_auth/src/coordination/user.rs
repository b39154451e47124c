use http::HeaderMap;

use crate::config::AuthConfig;
use crate::credential::{
    generate_salt, hash_password, validate_login, validate_registration, verify_password,
};
use crate::session::{
    SessionIdentity, Transport, authenticate_cookie_header, clear_session_cookie_headers,
    issue_session_token, session_cookie_headers,
};
use crate::userdb::{CredentialRecord, UserStore};

use super::errors::CoordinationError;

/// A successful register or login: who signed in and the `Set-Cookie` headers
/// that carry their session.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub username: String,
    pub headers: HeaderMap,
}

/// Creates a user and signs them in.
///
/// Fails with `Validation` for unacceptable input and `Conflict` when the
/// username is taken. An existing user's record is never touched.
#[tracing::instrument(skip(config, store, password))]
pub async fn register_user(
    config: &AuthConfig,
    store: &dyn UserStore,
    username: &str,
    password: &str,
    transport: Transport,
) -> Result<SignedIn, CoordinationError> {
    let credentials = validate_registration(username, password)?;

    if store.get_credentials(&credentials.username).await?.is_some() {
        return Err(CoordinationError::Conflict(credentials.username).log());
    }

    let salt = generate_salt()?;
    let password_hash = hash_password(&salt, &credentials.password);
    // The store's uniqueness check still decides a concurrent race
    store
        .insert_user(CredentialRecord::new(
            credentials.username.clone(),
            password_hash,
            salt,
        ))
        .await?;

    tracing::info!(username = %credentials.username, "User registered");
    sign_in(config, credentials.username, transport)
}

/// Verifies a username/password pair and signs the user in.
///
/// Unknown users and wrong passwords both yield `Unauthorized`.
#[tracing::instrument(skip(config, store, password))]
pub async fn login_user(
    config: &AuthConfig,
    store: &dyn UserStore,
    username: &str,
    password: &str,
    transport: Transport,
) -> Result<SignedIn, CoordinationError> {
    let credentials = validate_login(username, password)?;

    let Some(record) = store.get_credentials(&credentials.username).await? else {
        return Err(CoordinationError::Unauthorized.log());
    };

    if !verify_password(&record.salt, &credentials.password, &record.password_hash) {
        return Err(CoordinationError::Unauthorized.log());
    }

    tracing::info!(username = %record.username, "User logged in");
    sign_in(config, record.username, transport)
}

/// Headers that drop the session cookie. Tokens stay valid until they expire.
pub fn logout_user(transport: Transport) -> Result<HeaderMap, CoordinationError> {
    Ok(clear_session_cookie_headers(transport)?)
}

/// Identity carried by the request's session cookie, if any.
pub fn current_user(config: &AuthConfig, cookie_header: Option<&str>) -> Option<SessionIdentity> {
    authenticate_cookie_header(config, cookie_header)
}

fn sign_in(
    config: &AuthConfig,
    username: String,
    transport: Transport,
) -> Result<SignedIn, CoordinationError> {
    let token = issue_session_token(config, &username)?;
    let headers = session_cookie_headers(transport, &token, config.session_ttl)?;
    Ok(SignedIn { username, headers })
}
