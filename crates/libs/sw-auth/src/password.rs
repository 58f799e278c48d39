//! Password hashing and verification using Argon2.
//!
//! Passwords are treated as an opaque one-way function: [`hash`] produces a
//! self-describing hash string safe to store, [`matches`] verifies a login
//! attempt against it. The [`COMMON_PASSWORDS`] deny-list backs the
//! registration validation rule that rejects widely reused passwords.

use argon2::password_hash::{self, PasswordHashString, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Passwords rejected at registration regardless of length.
pub const COMMON_PASSWORDS: &[&str] = &[
    "12345678",
    "123456789",
    "1234567890",
    "123123123",
    "987654321",
    "aa123456",
    "abc12345",
    "asdfghjkl",
    "baseball",
    "basketball",
    "computer",
    "football",
    "iloveyou",
    "internet",
    "jennifer",
    "liverpool",
    "michelle",
    "onedirection",
    "password",
    "password1",
    "password123",
    "princess",
    "qwerty123",
    "qwertyuiop",
    "starwars",
    "sunshine",
    "superman",
    "trustno1",
    "welcome1",
    "whatever",
];

/// Generates an Argon2 hash for the provided password.
///
/// A fresh random salt is drawn per call, so hashing the same password twice
/// yields different strings. The output embeds the salt and parameters needed
/// for verification.
///
/// # Examples
///
/// ```rust
/// use sw_auth::password;
///
/// let hashed = password::hash("s3cretP455word").unwrap();
/// assert!(password::matches("s3cretP455word", &hashed).unwrap());
/// ```
pub fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// Returns `Ok(false)` for a well-formed hash that does not match, and an
/// error only when the stored hash itself cannot be parsed.
pub fn matches(password: &str, hashed: &str) -> Result<bool> {
    let hashed = PasswordHashString::new(hashed)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &hashed.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}
