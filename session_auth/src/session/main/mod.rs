mod cookie;
mod session;
mod token;

pub use cookie::{
    Transport, build_clear_cookie, build_set_cookie, clear_session_cookie_headers, read_cookie,
    session_cookie_headers,
};
pub use session::{authenticate, authenticate_cookie_header, issue_session_token};
pub use token::{decode_token, decode_token_at, encode_token};
