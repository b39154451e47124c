use http::header::{HeaderMap, SET_COOKIE};

use crate::session::config::SESSION_COOKIE_NAME;
use crate::session::errors::SessionError;

/// Transport the request arrived over; decides the `Secure` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Plain,
    Secure,
}

impl Transport {
    /// `https` (any case) is secure, everything else is plain.
    pub fn from_scheme(scheme: &str) -> Self {
        if scheme.eq_ignore_ascii_case("https") {
            Self::Secure
        } else {
            Self::Plain
        }
    }

    pub fn is_secure(self) -> bool {
        self == Self::Secure
    }
}

impl From<bool> for Transport {
    fn from(secure: bool) -> Self {
        if secure { Self::Secure } else { Self::Plain }
    }
}

fn format_cookie(transport: Transport, value: &str, max_age: u64) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}"
    );
    if transport.is_secure() {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value carrying `token`, percent-encoded.
pub fn build_set_cookie(transport: Transport, token: &str, max_age: u64) -> String {
    format_cookie(transport, &urlencoding::encode(token), max_age)
}

/// `Set-Cookie` value that expires the session cookie immediately.
pub fn build_clear_cookie(transport: Transport) -> String {
    format_cookie(transport, "", 0)
}

/// Finds cookie `name` in a raw `Cookie` header.
///
/// Segments are `;`-separated and trimmed; empty segments and segments without
/// `=` are skipped. Keys and values are percent-decoded and keys compared
/// case-sensitively.
pub fn read_cookie(cookie_header: Option<&str>, name: &str) -> Option<String> {
    let header = cookie_header?;

    for segment in header.split(';').map(str::trim) {
        if segment.is_empty() {
            continue;
        }
        let Some((raw_key, raw_value)) = segment.split_once('=') else {
            continue;
        };
        let Ok(key) = urlencoding::decode(raw_key.trim()) else {
            continue;
        };
        if key == name {
            return match urlencoding::decode(raw_value) {
                Ok(value) => Some(value.into_owned()),
                Err(_) => {
                    tracing::debug!("Cookie '{}' is not valid percent-encoded UTF-8", name);
                    None
                }
            };
        }
    }

    None
}

/// Appends a `Set-Cookie` header.
pub(crate) fn header_set_cookie<'a>(
    headers: &'a mut HeaderMap,
    cookie: &str,
) -> Result<&'a HeaderMap, SessionError> {
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))?,
    );
    Ok(headers)
}

/// Headers that set the session cookie on the response.
pub fn session_cookie_headers(
    transport: Transport,
    token: &str,
    max_age: u64,
) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &build_set_cookie(transport, token, max_age))?;
    Ok(headers)
}

/// Headers that clear the session cookie on the response.
pub fn clear_session_cookie_headers(transport: Transport) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(&mut headers, &build_clear_cookie(transport))?;
    Ok(headers)
}
