use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::userdb::{errors::UserError, types::CredentialRecord};

use super::store_type::UserStore;

/// Process-local store, for tests and single-instance demos.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, CredentialRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_credentials(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, UserError> {
        Ok(self.users.lock().await.get(username).cloned())
    }

    async fn insert_user(&self, record: CredentialRecord) -> Result<(), UserError> {
        let mut users = self.users.lock().await;
        if users.contains_key(&record.username) {
            return Err(UserError::AlreadyExists(record.username));
        }
        users.insert(record.username.clone(), record);
        Ok(())
    }
}
