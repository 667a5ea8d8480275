//! # Password hashing — Argon2id
//!
//! [`hash_password`] generates a random salt via [`OsRng`], hashes the plaintext with
//! the default Argon2id parameters and returns a PHC-format string
//! (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`). That string is what the account
//! directory stores.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| format!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::PasswordHash;

    #[test]
    fn test_hash_is_argon2id_phc() {
        let hash = hash_password("Abcdef1!").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert_eq!(parsed.algorithm.as_str(), "argon2id");
        assert!(!hash.contains("Abcdef1!"));
    }

    #[test]
    fn test_salts_differ() {
        let first = hash_password("Abcdef1!").unwrap();
        let second = hash_password("Abcdef1!").unwrap();
        assert_ne!(first, second);
    }
}
