//! session_auth - Stateless cookie sessions for small web backends
//!
//! Users register and log in with a username and password. Passwords are
//! stored as salted SHA-256 digests, and a successful sign-in hands back an
//! HMAC-signed session token carried in the `session` cookie. Verifying a
//! later request needs nothing but the token and the signing secret; there is
//! no server-side session table.
//!
//! Token wire format:
//!
//! ```text
//! base64url(json payload) "." base64url(HMAC-SHA256(secret, base64url(json payload)))
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use session_auth::{AuthConfig, Transport, connect_user_store, login_user, register_user};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AuthConfig::new("a long random secret");
//! let store = connect_user_store("memory", "").await?;
//!
//! register_user(&config, store.as_ref(), "alice", "secret1", Transport::Plain).await?;
//! let signed_in = login_user(&config, store.as_ref(), "alice", "secret1", Transport::Secure).await?;
//! assert_eq!(signed_in.username, "alice");
//! # Ok(())
//! # }
//! ```

mod config;
mod coordination;
mod credential;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{AuthConfig, ConfigError, DEFAULT_AUTH_ROUTE_PREFIX, SessionSecret};

pub use coordination::{
    CoordinationError, SignedIn, current_user, login_user, logout_user, register_user,
};

pub use credential::{
    Credentials, ValidationError, generate_salt, hash_password, validate_login,
    validate_registration, verify_password,
};

pub use session::{
    DEFAULT_SESSION_TTL, SESSION_COOKIE_NAME, SessionClaims, SessionError, SessionIdentity,
    TokenStatus, Transport, authenticate, authenticate_cookie_header, build_clear_cookie,
    build_set_cookie, clear_session_cookie_headers, decode_token, decode_token_at, encode_token,
    issue_session_token, read_cookie, session_cookie_headers,
};

pub use userdb::{
    CredentialRecord, MemoryUserStore, PostgresUserStore, SqliteUserStore, UserError, UserStore,
    connect_user_store,
};

pub use utils::{UtilError, base64url_decode, base64url_encode, hex_encode, random_hex};
