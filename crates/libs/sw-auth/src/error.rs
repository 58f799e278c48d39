#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cookie value failed MAC verification, AEAD authentication, or
    /// structural checks. Deliberately coarse: callers get one signal.
    #[error("Invalid Value")]
    InvalidValue,

    /// Cookie wire value exceeds the size ceiling. Returned before any
    /// cryptographic work is attempted.
    #[error("Value Too Long")]
    ValueTooLong,

    /// Bearer token failed verification: malformed structure, bad signature,
    /// or claim violation. All collapse here so that the rejection carries no
    /// oracle about which check failed.
    #[error("Invalid Token")]
    InvalidToken,

    /// Key material has the wrong length for the selected cipher.
    #[error("Invalid Key Length")]
    InvalidKeyLength,

    #[error(transparent)]
    Decode(#[from] base64::DecodeError),

    #[error("Token Creation")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),

    /// Token expiry arithmetic overflowed.
    #[error("Auth Token Creation")]
    AuthTokenCreation,

    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}
