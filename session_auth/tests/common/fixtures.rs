use std::sync::{Arc, Once};

use http::HeaderMap;
use http::header::SET_COOKIE;
use session_auth::{AuthConfig, UserStore, connect_user_store};

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Loads `.env_test` (falling back to `.env`) once per test binary.
pub fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

pub fn test_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET)
}

/// Every embedded backend, freshly initialized.
pub async fn all_stores() -> Vec<(&'static str, Arc<dyn UserStore>)> {
    init_test_environment();
    vec![
        (
            "memory",
            connect_user_store("memory", "")
                .await
                .expect("memory store"),
        ),
        (
            "sqlite",
            connect_user_store("sqlite", "sqlite::memory:")
                .await
                .expect("sqlite store"),
        ),
    ]
}

/// The single `Set-Cookie` value of a response.
pub fn set_cookie(headers: &HeaderMap) -> String {
    let values: Vec<_> = headers.get_all(SET_COOKIE).iter().collect();
    assert_eq!(values.len(), 1, "expected exactly one Set-Cookie header");
    values[0].to_str().expect("ascii cookie").to_string()
}

/// What a browser would send back after receiving `headers`.
pub fn browser_cookie_header(headers: &HeaderMap) -> String {
    let cookie = set_cookie(headers);
    let pair = cookie.split(';').next().unwrap_or_default();
    format!("theme=dark; {pair}; lang=en")
}
