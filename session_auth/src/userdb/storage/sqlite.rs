use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use crate::storage::{validate_sqlite_table_schema, validate_table_name};
use crate::userdb::{errors::UserError, types::CredentialRecord};

use super::config::DB_TABLE_USERS;
use super::store_type::UserStore;

#[derive(Clone, Debug)]
pub struct SqliteUserStore {
    pool: Pool<Sqlite>,
    table_name: String,
}

impl SqliteUserStore {
    /// Store over `pool` using the configured users table name.
    pub fn new(pool: Pool<Sqlite>) -> Result<Self, UserError> {
        Self::with_table_name(pool, DB_TABLE_USERS.as_str())
    }

    pub fn with_table_name(pool: Pool<Sqlite>, table_name: &str) -> Result<Self, UserError> {
        validate_table_name(table_name).map_err(UserError::InvalidData)?;
        Ok(Self {
            pool,
            table_name: table_name.to_string(),
        })
    }

    async fn create_tables(&self) -> Result<(), UserError> {
        let table_name = &self.table_name;

        sqlx::query(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table_name} (
                username TEXT PRIMARY KEY NOT NULL,
                password_hash TEXT NOT NULL,
                salt TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL
            )
            "#
        ))
        .execute(&self.pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()))?;

        Ok(())
    }

    /// Validates that the users table schema matches what we expect
    async fn validate_tables(&self) -> Result<(), UserError> {
        let expected_columns = [
            ("username", "TEXT"),
            ("password_hash", "TEXT"),
            ("salt", "TEXT"),
            ("created_at", "TIMESTAMP"),
        ];

        validate_sqlite_table_schema(
            &self.pool,
            &self.table_name,
            &expected_columns,
            UserError::Storage,
        )
        .await
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn init(&self) -> Result<(), UserError> {
        self.create_tables().await?;
        self.validate_tables().await
    }

    #[tracing::instrument(skip(self))]
    async fn get_credentials(
        &self,
        username: &str,
    ) -> Result<Option<CredentialRecord>, UserError> {
        let table_name = &self.table_name;

        let result = sqlx::query_as::<_, CredentialRecord>(&format!(
            r#"
            SELECT username, password_hash, salt, created_at FROM {table_name} WHERE username = ?
            "#
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::Storage(e.to_string()));

        match &result {
            Ok(found) => tracing::debug!(found = found.is_some(), "User lookup completed"),
            Err(e) => tracing::error!(error = %e, "User lookup failed"),
        }

        result
    }

    #[tracing::instrument(skip(self, record), fields(username = %record.username))]
    async fn insert_user(&self, record: CredentialRecord) -> Result<(), UserError> {
        let table_name = &self.table_name;

        sqlx::query(&format!(
            r#"
            INSERT INTO {table_name} (username, password_hash, salt, created_at)
            VALUES (?, ?, ?, ?)
            "#
        ))
        .bind(&record.username)
        .bind(&record.password_hash)
        .bind(&record.salt)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => UserError::AlreadyExists(record.username.clone()),
            _ => UserError::Storage(e.to_string()),
        })?;

        Ok(())
    }
}
