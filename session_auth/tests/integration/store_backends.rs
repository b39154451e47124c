use session_auth::{CredentialRecord, UserError, connect_user_store, hash_password};

use crate::common::*;

fn record(username: &str, password: &str, salt: &str) -> CredentialRecord {
    CredentialRecord::new(
        username.to_string(),
        hash_password(salt, password),
        salt.to_string(),
    )
}

#[tokio::test]
async fn test_backends_insert_and_fetch() {
    for (name, store) in all_stores().await {
        assert!(store.get_credentials("zoe").await.unwrap().is_none(), "{name}");

        store.insert_user(record("zoe", "pw1234", "abcd")).await.unwrap();
        let found = store.get_credentials("zoe").await.unwrap().unwrap();
        assert_eq!(found.username, "zoe", "{name}");
        assert_eq!(found.salt, "abcd", "{name}");
        assert_eq!(found.password_hash, hash_password("abcd", "pw1234"), "{name}");
    }
}

#[tokio::test]
async fn test_backends_reject_duplicates() {
    for (name, store) in all_stores().await {
        store.insert_user(record("zoe", "pw1", "s1")).await.unwrap();
        let err = store.insert_user(record("zoe", "pw2", "s2")).await.unwrap_err();
        assert!(
            matches!(err, UserError::AlreadyExists(ref u) if u == "zoe"),
            "{name}: got {err:?}"
        );
    }
}

#[tokio::test]
async fn test_usernames_are_case_sensitive() {
    for (name, store) in all_stores().await {
        store.insert_user(record("Zoe", "pw1", "s1")).await.unwrap();
        assert!(store.get_credentials("zoe").await.unwrap().is_none(), "{name}");
    }
}

#[tokio::test]
async fn test_unknown_store_type() {
    let result = connect_user_store("redis", "redis://localhost").await;
    assert!(matches!(result, Err(UserError::InvalidData(_))));
}
