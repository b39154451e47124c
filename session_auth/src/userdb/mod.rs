mod errors;
mod storage;
mod types;

pub use errors::UserError;
pub use storage::{
    MemoryUserStore, PostgresUserStore, SqliteUserStore, UserStore, connect_user_store,
};
pub use types::CredentialRecord;
