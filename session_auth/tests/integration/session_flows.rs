use serde_json::json;
use session_auth::{
    CoordinationError, SESSION_COOKIE_NAME, SessionClaims, TokenStatus, Transport, authenticate,
    current_user, decode_token, encode_token, login_user, logout_user, read_cookie,
    register_user,
};

use crate::common::*;

#[tokio::test]
async fn test_register_then_cookie_authenticates() {
    let config = test_config();
    for (name, store) in all_stores().await {
        let signed_in = register_user(&config, store.as_ref(), "alice", "secret1", Transport::Plain)
            .await
            .unwrap_or_else(|e| panic!("{name}: register failed: {e}"));

        let cookie_header = browser_cookie_header(&signed_in.headers);
        let token = read_cookie(Some(&cookie_header), SESSION_COOKIE_NAME).unwrap();
        let identity = authenticate(&config, &token).unwrap();
        assert_eq!(identity.username, "alice", "{name}");
    }
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized_without_cookie() {
    let config = test_config();
    for (name, store) in all_stores().await {
        register_user(&config, store.as_ref(), "alice", "secret1", Transport::Plain)
            .await
            .unwrap();

        let result = login_user(&config, store.as_ref(), "alice", "wrongpass", Transport::Plain).await;
        assert!(
            matches!(result, Err(CoordinationError::Unauthorized)),
            "{name}: expected unauthorized"
        );
    }
}

#[tokio::test]
async fn test_login_after_register() {
    let config = test_config();
    for (name, store) in all_stores().await {
        register_user(&config, store.as_ref(), "carol", "hunter22", Transport::Plain)
            .await
            .unwrap();

        let signed_in = login_user(&config, store.as_ref(), "  carol ", "hunter22", Transport::Secure)
            .await
            .unwrap();
        assert_eq!(signed_in.username, "carol", "{name}");
        assert!(set_cookie(&signed_in.headers).ends_with("; Secure"), "{name}");

        let identity = current_user(&config, Some(&browser_cookie_header(&signed_in.headers)));
        assert_eq!(identity.map(|i| i.username).as_deref(), Some("carol"));
    }
}

#[tokio::test]
async fn test_zero_ttl_token_is_immediately_invalid() {
    let config = test_config().with_session_ttl(0);
    for (_, store) in all_stores().await {
        let signed_in = register_user(&config, store.as_ref(), "dave", "secret1", Transport::Plain)
            .await
            .unwrap();
        assert!(set_cookie(&signed_in.headers).contains("Max-Age=0"));
        assert_eq!(
            current_user(&config, Some(&browser_cookie_header(&signed_in.headers))),
            None
        );
    }

    // Same property for a hand-built payload with exp == iat
    let token = encode_token(&config.secret, &json!({ "u": "dave", "iat": 1, "exp": 1 })).unwrap();
    assert_eq!(decode_token::<SessionClaims>(&config.secret, &token), TokenStatus::Invalid);
}

#[test]
fn test_read_cookie_among_others() {
    let header = "foo=bar; session=abc.def; other=1";
    assert_eq!(read_cookie(Some(header), "session").as_deref(), Some("abc.def"));
}

#[tokio::test]
async fn test_double_registration_is_conflict() {
    let config = test_config();
    for (name, store) in all_stores().await {
        register_user(&config, store.as_ref(), "alice", "secret1", Transport::Plain)
            .await
            .unwrap();
        let original = store.get_credentials("alice").await.unwrap().unwrap();

        let second = register_user(&config, store.as_ref(), "alice", "different", Transport::Plain).await;
        assert!(
            matches!(second, Err(CoordinationError::Conflict(_))),
            "{name}: expected conflict"
        );

        let after = store.get_credentials("alice").await.unwrap().unwrap();
        assert_eq!(original.password_hash, after.password_hash, "{name}");
        assert_eq!(original.salt, after.salt, "{name}");
        login_user(&config, store.as_ref(), "alice", "secret1", Transport::Plain)
            .await
            .unwrap_or_else(|e| panic!("{name}: original password should still work: {e}"));
    }
}

#[test]
fn test_logout_then_cookie_is_empty() {
    let headers = logout_user(Transport::Plain).unwrap();
    let cookie = set_cookie(&headers);
    assert!(cookie.starts_with("session=;"));
    assert!(cookie.contains("Max-Age=0"));
    assert_eq!(current_user(&test_config(), Some("session=")), None);
}

#[tokio::test]
async fn test_rotated_secret_logs_everyone_out() {
    let config = test_config();
    let (_, store) = all_stores().await.remove(0);
    let signed_in = register_user(&config, store.as_ref(), "erin", "secret1", Transport::Plain)
        .await
        .unwrap();
    let cookie_header = browser_cookie_header(&signed_in.headers);

    let rotated = session_auth::AuthConfig::new("a completely different secret value");
    assert!(current_user(&config, Some(&cookie_header)).is_some());
    assert!(current_user(&rotated, Some(&cookie_header)).is_none());
}
