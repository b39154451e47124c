use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::utils::{UtilError, hex_encode, random_hex};

/// Salt length in bytes; hex encoding doubles it to 32 characters
pub(crate) const SALT_BYTES: usize = 16;

/// Hex SHA-256 digest of `"{salt}:{password}"`.
pub fn hash_password(salt_hex: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt_hex.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    hex_encode(hasher.finalize())
}

/// Fresh per-user salt from the system CSPRNG.
pub fn generate_salt() -> Result<String, UtilError> {
    random_hex(SALT_BYTES)
}

/// Recomputes the digest with the stored salt and compares it in constant time.
pub fn verify_password(salt_hex: &str, password: &str, expected_hash: &str) -> bool {
    let calculated = hash_password(salt_hex, password);
    calculated.as_bytes().ct_eq(expected_hash.as_bytes()).into()
}
