//! Database table configuration

use std::{env, sync::LazyLock};

/// Table prefix from environment variable
pub(crate) static DB_TABLE_PREFIX: LazyLock<String> =
    LazyLock::new(|| env::var("DB_TABLE_PREFIX").unwrap_or_else(|_| "sa_".to_string()));

/// Table names are interpolated into SQL, so only `[A-Za-z0-9_]` is accepted.
pub(crate) fn validate_table_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > 63 {
        return Err(format!("Invalid table name length: '{name}'"));
    }
    if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return Err(format!("Invalid characters in table name: '{name}'"));
    }
    if name.as_bytes()[0].is_ascii_digit() {
        return Err(format!("Table name must not start with a digit: '{name}'"));
    }
    Ok(())
}
