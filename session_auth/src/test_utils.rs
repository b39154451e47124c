//! Shared helpers for unit tests across the crate

use http::HeaderMap;
use http::header::SET_COOKIE;

use crate::config::AuthConfig;

pub(crate) const TEST_SECRET: &str = "unit-test-secret-with-enough-entropy!";

pub(crate) fn test_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET)
}

/// Turns the `Set-Cookie` headers of a response into the `Cookie` header a
/// browser would send on its next request.
pub(crate) fn cookie_header_from(headers: &HeaderMap) -> String {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}
