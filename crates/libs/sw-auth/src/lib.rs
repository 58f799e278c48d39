//! Authentication primitives for the sqlwarden API.
//!
//! This crate holds the security core of the repository: URL-safe byte
//! encoding, signed and authenticated-encrypted cookie values, JWT issuance
//! and verification, and password hashing. Everything here is a pure function
//! of its input bytes and an explicitly supplied key; no key material is read
//! from ambient state.

pub mod codec;
pub mod cookie;
pub mod error;
pub mod password;
pub mod prelude;
pub mod token;

/// HTTP header carrying the bearer credential.
pub const AUTH_HEADER: &str = "Authorization";
/// Exact prefix of a well-formed bearer credential (scheme, single space).
pub const AUTH_HEADER_PREFIX: &str = "Bearer ";
/// Token type reported to clients and used in authentication challenges.
pub const AUTH_SCHEME: &str = "Bearer";
