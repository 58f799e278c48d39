//! URL-safe byte encoding for cookie and token wire values.
//!
//! Thin wrapper around unpadded URL-safe base64 with strict decoding: any
//! character outside the alphabet or a malformed length is rejected rather
//! than silently truncated.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::prelude::*;

/// Encodes raw bytes into URL-safe unpadded base64.
///
/// # Examples
///
/// ```rust
/// use sw_auth::codec;
///
/// assert_eq!(codec::encode(b"hello"), "aGVsbG8");
/// ```
pub fn encode(value: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(value)
}

/// Decodes a URL-safe unpadded base64 string back into bytes.
///
/// Fails with [`Error::Decode`] on any character outside the alphabet or an
/// impossible input length.
pub fn decode(value: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_NO_PAD.decode(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() -> Result<()> {
        let value = "this is a test value with special chars!\u{4fbf}#\u{64a}%";
        let encoded = encode(value.as_bytes());
        assert_eq!(decode(&encoded)?, value.as_bytes());
        Ok(())
    }

    #[test]
    fn rejects_invalid_alphabet() {
        assert!(decode("invalid-base64!").is_err());
    }

    #[test]
    fn rejects_standard_alphabet_symbols() {
        // '+' and '/' belong to the standard alphabet, not the URL-safe one.
        assert!(decode("ab+/").is_err());
    }

    #[test]
    fn rejects_impossible_length() {
        // A single trailing symbol can never be produced by the encoder.
        assert!(decode("aGVsbG8x1").is_err());
    }

    #[test]
    fn empty_input() -> Result<()> {
        assert_eq!(encode(b""), "");
        assert_eq!(decode("")?, Vec::<u8>::new());
        Ok(())
    }
}
