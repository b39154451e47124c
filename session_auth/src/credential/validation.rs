use thiserror::Error;

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 32;
const PASSWORD_MIN_LEN: usize = 6;

/// Rejections reported to the client verbatim; the messages are part of the
/// HTTP contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing username/password")]
    MissingCredentials,

    #[error("invalid username")]
    InvalidUsername,

    #[error("password too short")]
    PasswordTooShort,
}

/// Username and password after trimming and checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Presence check shared by login and registration. The username is trimmed,
/// the password is taken as is.
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, ValidationError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Registration additionally requires `[A-Za-z0-9_.-]{3,32}` usernames and
/// passwords of at least six characters.
pub fn validate_registration(
    username: &str,
    password: &str,
) -> Result<Credentials, ValidationError> {
    let credentials = validate_login(username, password)?;

    if !is_valid_username(&credentials.username) {
        return Err(ValidationError::InvalidUsername);
    }
    if credentials.password.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(credentials)
}

fn is_valid_username(username: &str) -> bool {
    (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.len())
        && username
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.'))
}
