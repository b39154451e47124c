use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum UserError {
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for UserError {
    fn from(err: sqlx::Error) -> Self {
        UserError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sqlx_error() {
        let user_error = UserError::from(sqlx::Error::PoolTimedOut);
        match user_error {
            UserError::Storage(msg) => {
                assert!(!msg.is_empty(), "Error message should carry the original error");
            }
            _ => panic!("Expected Storage variant"),
        }
    }

    #[test]
    fn test_already_exists_display() {
        let error = UserError::AlreadyExists("alice".to_string());
        assert_eq!(error.to_string(), "User already exists: alice");
    }
}
