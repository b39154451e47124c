mod config;
mod schema_validation;

pub(crate) use config::{DB_TABLE_PREFIX, validate_table_name};
pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};
