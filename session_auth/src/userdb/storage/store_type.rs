use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::userdb::{errors::UserError, types::CredentialRecord};

use super::memory::MemoryUserStore;
use super::postgres::PostgresUserStore;
use super::sqlite::SqliteUserStore;

/// Credential store consulted by registration and login.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create and validate the backing schema, if any
    async fn init(&self) -> Result<(), UserError> {
        Ok(())
    }

    async fn get_credentials(&self, username: &str)
    -> Result<Option<CredentialRecord>, UserError>;

    /// Inserts a new user; `UserError::AlreadyExists` if the username is taken.
    async fn insert_user(&self, record: CredentialRecord) -> Result<(), UserError>;
}

/// Opens and initializes a store of the given type: `memory`, `sqlite` or `postgres`.
pub async fn connect_user_store(
    store_type: &str,
    store_url: &str,
) -> Result<Arc<dyn UserStore>, UserError> {
    tracing::info!("Initializing user store with type: {}", store_type);

    let store: Arc<dyn UserStore> = match store_type {
        "memory" => Arc::new(MemoryUserStore::new()),
        "sqlite" => {
            let opts = sqlx::sqlite::SqliteConnectOptions::from_str(store_url)?
                .create_if_missing(true);
            // An in-memory database exists per connection, so keep exactly one alive
            let in_memory = store_url.contains(":memory:") || store_url.contains("mode=memory");
            let pool = if in_memory {
                sqlx::sqlite::SqlitePoolOptions::new()
                    .max_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
                    .connect_with(opts)
                    .await?
            } else {
                sqlx::sqlite::SqlitePoolOptions::new()
                    .connect_with(opts)
                    .await?
            };
            Arc::new(SqliteUserStore::new(pool)?)
        }
        "postgres" => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .connect(store_url)
                .await?;
            Arc::new(PostgresUserStore::new(pool)?)
        }
        t => {
            return Err(UserError::InvalidData(format!(
                "Unsupported store type: {t}. Supported types are 'memory', 'sqlite' and 'postgres'"
            )));
        }
    };

    store.init().await?;
    tracing::info!("User store ready: type={}", store_type);
    Ok(store)
}
