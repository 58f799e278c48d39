//! Signed cookie values.
//!
//! The wire form is `base64(tag ‖ value)` where `tag` is an HMAC-SHA256 over
//! `name ‖ value`. The value stays readable by the client; any modification
//! of it, or replay under a different cookie name, fails verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::codec;
use crate::cookie::{Cookie, MAX_WIRE_LEN};
use crate::prelude::*;

type HmacSha256 = Hmac<Sha256>;

/// Length in bytes of the embedded authentication tag.
pub const TAG_LEN: usize = 32;

/// Key for cookie signing. Constructed once from configuration and shared
/// read-only for the process lifetime.
#[derive(Clone)]
pub struct MacKey(Vec<u8>);

impl MacKey {
    /// Creates a signing key from a configured secret.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }
}

impl std::fmt::Debug for MacKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MacKey(REDACTED)")
    }
}

fn authentication_tag(name: &str, value: &[u8], key: &MacKey) -> HmacSha256 {
    // HMAC accepts keys of any length.
    let mut mac = HmacSha256::new_from_slice(&key.0).expect("HMAC key length");
    mac.update(name.as_bytes());
    mac.update(value);
    mac
}

/// Signs a cookie value for transmission.
///
/// Fails with [`Error::ValueTooLong`] when the encoded wire form would exceed
/// the browser cookie limit.
///
/// # Examples
///
/// ```rust
/// use sw_auth::cookie::{Cookie, signed};
///
/// let key = signed::MacKey::new("mySecretKeyAX7v2WqLpJ3nZcRYKtM9o");
/// let cookie = Cookie::new("session", "this is a test value");
///
/// let wire = signed::write(&cookie, &key).unwrap();
/// let value = signed::read(&wire, "session", &key).unwrap();
/// assert_eq!(value, cookie.value);
/// ```
pub fn write(cookie: &Cookie, key: &MacKey) -> Result<String> {
    let tag = authentication_tag(&cookie.name, &cookie.value, key)
        .finalize()
        .into_bytes();

    let mut raw = Vec::with_capacity(TAG_LEN + cookie.value.len());
    raw.extend_from_slice(&tag);
    raw.extend_from_slice(&cookie.value);

    let wire = codec::encode(&raw);
    if wire.len() > MAX_WIRE_LEN {
        return Err(Error::ValueTooLong);
    }
    Ok(wire)
}

/// Verifies a signed wire value and returns the embedded cookie value.
///
/// The expected cookie name takes part in verification, so a wire value
/// lifted from another cookie is rejected. The tag comparison is constant
/// time. All verification failures collapse to [`Error::InvalidValue`].
pub fn read(wire: &str, name: &str, key: &MacKey) -> Result<Vec<u8>> {
    if wire.len() > MAX_WIRE_LEN {
        return Err(Error::ValueTooLong);
    }

    let raw = codec::decode(wire).map_err(|_| Error::InvalidValue)?;
    if raw.len() < TAG_LEN {
        return Err(Error::InvalidValue);
    }
    let (tag, value) = raw.split_at(TAG_LEN);

    authentication_tag(name, value, key)
        .verify_slice(tag)
        .map_err(|_| Error::InvalidValue)?;

    Ok(value.to_vec())
}
