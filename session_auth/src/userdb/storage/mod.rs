mod config;
mod memory;
mod postgres;
mod sqlite;
mod store_type;

pub use memory::MemoryUserStore;
pub use postgres::PostgresUserStore;
pub use sqlite::SqliteUserStore;
pub use store_type::{UserStore, connect_user_store};
