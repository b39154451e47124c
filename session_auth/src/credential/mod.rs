mod hasher;
mod validation;

pub use hasher::{generate_salt, hash_password, verify_password};
pub use validation::{Credentials, ValidationError, validate_login, validate_registration};
