use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored credentials for one user.
///
/// `salt` is generated once at registration and never reused;
/// `password_hash` is `sha256_hex("{salt}:{password}")`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct CredentialRecord {
    pub username: String,
    pub password_hash: String,
    pub salt: String,
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(username: String, password_hash: String, salt: String) -> Self {
        Self {
            username,
            password_hash,
            salt,
            created_at: Utc::now(),
        }
    }
}
