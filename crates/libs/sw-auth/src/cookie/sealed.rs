//! Encrypted cookie values.
//!
//! The wire form is `base64(nonce ‖ ciphertext ‖ tag)` produced by
//! AES-256-GCM with a fresh random nonce per encryption and the cookie name
//! as associated data. Unlike [`signed`](crate::cookie::signed) values, the
//! payload is unreadable by the client.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use crate::codec;
use crate::cookie::{Cookie, MAX_WIRE_LEN};
use crate::prelude::*;

/// Length in bytes of the AES-GCM nonce prepended to the ciphertext.
pub const NONCE_LEN: usize = 12;

/// Required key length for AES-256-GCM.
pub const KEY_LEN: usize = 32;

/// Key for cookie encryption. Constructed once from configuration and shared
/// read-only for the process lifetime.
#[derive(Clone)]
pub struct CipherKey([u8; KEY_LEN]);

impl CipherKey {
    /// Creates a cipher key from a configured secret.
    ///
    /// Fails with [`Error::InvalidKeyLength`] unless the secret is exactly
    /// [`KEY_LEN`] bytes.
    pub fn new(secret: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = secret.try_into().map_err(|_| Error::InvalidKeyLength)?;
        Ok(Self(bytes))
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.0))
    }
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CipherKey(REDACTED)")
    }
}

/// Encrypts a cookie value for transmission.
///
/// Every call draws a fresh nonce from the operating system RNG, so sealing
/// the same cookie twice yields different wire values.
///
/// # Examples
///
/// ```rust
/// use sw_auth::cookie::{Cookie, sealed};
///
/// let key = sealed::CipherKey::new(b"mySecretKeyAX7v2WqLpJ3nZcRYKtM9o").unwrap();
/// let cookie = Cookie::new("session", "this is a test value");
///
/// let wire = sealed::write(&cookie, &key).unwrap();
/// let value = sealed::read(&wire, "session", &key).unwrap();
/// assert_eq!(value, cookie.value);
/// ```
pub fn write(cookie: &Cookie, key: &CipherKey) -> Result<String> {
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let sealed = key
        .cipher()
        .encrypt(
            &nonce,
            Payload {
                msg: &cookie.value,
                aad: cookie.name.as_bytes(),
            },
        )
        .map_err(|_| Error::InvalidValue)?;

    let mut raw = Vec::with_capacity(NONCE_LEN + sealed.len());
    raw.extend_from_slice(&nonce);
    raw.extend_from_slice(&sealed);

    let wire = codec::encode(&raw);
    if wire.len() > MAX_WIRE_LEN {
        return Err(Error::ValueTooLong);
    }
    Ok(wire)
}

/// Decrypts a sealed wire value and returns the embedded cookie value.
///
/// The expected cookie name is authenticated as associated data, so a wire
/// value lifted from another cookie fails to open. Wrong key, truncation and
/// bit flips are all reported identically as [`Error::InvalidValue`].
pub fn read(wire: &str, name: &str, key: &CipherKey) -> Result<Vec<u8>> {
    if wire.len() > MAX_WIRE_LEN {
        return Err(Error::ValueTooLong);
    }

    let raw = codec::decode(wire).map_err(|_| Error::InvalidValue)?;
    if raw.len() < NONCE_LEN {
        return Err(Error::InvalidValue);
    }
    let (nonce, sealed) = raw.split_at(NONCE_LEN);

    key.cipher()
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: sealed,
                aad: name.as_bytes(),
            },
        )
        .map_err(|_| Error::InvalidValue)
}
