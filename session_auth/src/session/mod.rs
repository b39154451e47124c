mod common;
mod config;
mod errors;
mod main;
mod types;

pub use config::{DEFAULT_SESSION_TTL, SESSION_COOKIE_NAME};
pub use errors::SessionError;
pub use main::{
    Transport, authenticate, authenticate_cookie_header, build_clear_cookie, build_set_cookie,
    clear_session_cookie_headers, decode_token, decode_token_at, encode_token,
    issue_session_token, read_cookie, session_cookie_headers,
};
pub use types::{SessionClaims, SessionIdentity, TokenStatus};
