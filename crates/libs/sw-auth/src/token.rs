//! JWT issuance and verification for API authentication.
//!
//! Tokens are HS256-signed and time-bounded. Verification checks the
//! signature, issuer, audience and validity window in one pass; every
//! failure collapses to [`Error::InvalidToken`] so the rejection leaks
//! nothing about which check failed (an expired token is indistinguishable
//! from a forged one at the API boundary).

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// JWT signing algorithm used for all issued tokens.
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Lifetime of an issued authentication token.
pub const AUTH_TOKEN_TTL: TimeDelta = TimeDelta::hours(24);

/// Cryptographic key pair for token signing and verification.
///
/// Built once from the configured secret at startup and shared read-only
/// across requests.
pub struct TokenKeys {
    /// Key used for signing new tokens.
    encoding: EncodingKey,
    /// Key used for verifying inbound tokens.
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Creates a new key pair from the provided secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Registered claims carried by an authentication token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID, decimal).
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Intended audiences.
    pub aud: Vec<String>,
    /// Issued at time.
    pub iat: i64,
    /// Not before time.
    pub nbf: i64,
    /// Expiration time.
    pub exp: i64,
}

/// Issues a signed authentication token for a user.
///
/// The claims are anchored at the current instant: `iat = nbf = now` and
/// `exp = now + ttl`, with issuer and audience both set to `base_url`.
/// Returns the compact token string together with its expiry instant.
///
/// # Examples
///
/// ```rust
/// use sw_auth::token::{AUTH_TOKEN_TTL, TokenKeys, sign, verify};
///
/// let keys = TokenKeys::new(b"k7mp29rf4qxhwn8vbtaj6pgucmve53y9");
/// let (token, _expiry) = sign(42, "https://www.example.com", AUTH_TOKEN_TTL, &keys).unwrap();
///
/// let claims = verify(&token, "https://www.example.com", &keys).unwrap();
/// assert_eq!(claims.sub, "42");
/// ```
pub fn sign(
    user_id: i64,
    base_url: &str,
    ttl: TimeDelta,
    keys: &TokenKeys,
) -> Result<(String, DateTime<Utc>)> {
    let now = Utc::now();
    let expiry = now
        .checked_add_signed(ttl)
        .ok_or(Error::AuthTokenCreation)?;

    let claims = Claims {
        sub: user_id.to_string(),
        iss: String::from(base_url),
        aud: vec![String::from(base_url)],
        iat: now.timestamp(),
        nbf: now.timestamp(),
        exp: expiry.timestamp(),
    };

    let token = encode(&Header::new(ALGORITHM), &claims, &keys.encoding)
        .map_err(Error::TokenCreation)?;
    Ok((token, expiry))
}

/// Verifies an inbound token and extracts its claims.
///
/// Checks, with zero leeway: HS256 signature, `iss == base_url`, `aud`
/// contains `base_url`, and `nbf <= now < exp`. Any failure, including a
/// structurally malformed token or an unsupported algorithm, is reported as
/// [`Error::InvalidToken`].
pub fn verify(token: &str, base_url: &str, keys: &TokenKeys) -> Result<Claims> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;
    validation.validate_nbf = true;
    validation.set_issuer(&[base_url]);
    validation.set_audience(&[base_url]);

    decode::<Claims>(token, &keys.decoding, &validation)
        .map(|data| data.claims)
        .map_err(|_| Error::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"k7mp29rf4qxhwn8vbtaj6pgucmve53y9";
    const BASE_URL: &str = "https://www.example.com";

    fn keys() -> TokenKeys {
        TokenKeys::new(SECRET)
    }

    fn test_claims() -> Claims {
        let now = Utc::now();
        Claims {
            sub: String::from("1"),
            iss: String::from(BASE_URL),
            aud: vec![String::from(BASE_URL)],
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: (now + TimeDelta::hours(24)).timestamp(),
        }
    }

    fn encode_claims(claims: &Claims, secret: &[u8]) -> String {
        encode(
            &Header::new(ALGORITHM),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn round_trip() -> Result<()> {
        let (token, expiry) = sign(42, BASE_URL, AUTH_TOKEN_TTL, &keys())?;
        let claims = verify(&token, BASE_URL, &keys())?;

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iss, BASE_URL);
        assert_eq!(claims.aud, vec![String::from(BASE_URL)]);
        assert_eq!(claims.iat, claims.nbf);
        assert_eq!(claims.exp, expiry.timestamp());
        Ok(())
    }

    #[test]
    fn distinct_tokens_for_distinct_instants() -> Result<()> {
        let claims_now = test_claims();
        let mut claims_later = claims_now.clone();
        claims_later.iat += 1;

        assert_ne!(
            encode_claims(&claims_now, SECRET),
            encode_claims(&claims_later, SECRET)
        );
        Ok(())
    }

    #[test]
    fn rejects_wrong_key() -> Result<()> {
        let (token, _) = sign(42, BASE_URL, AUTH_TOKEN_TTL, &keys())?;

        let wrong = TokenKeys::new(b"this-is-the-wrong-key");
        assert!(matches!(
            verify(&token, BASE_URL, &wrong),
            Err(Error::InvalidToken)
        ));
        Ok(())
    }

    #[test]
    fn rejects_wrong_issuer() {
        let mut claims = test_claims();
        claims.iss = String::from("https://wrong.example.com");

        let token = encode_claims(&claims, SECRET);
        assert!(matches!(
            verify(&token, BASE_URL, &keys()),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn rejects_wrong_audience() {
        let mut claims = test_claims();
        claims.aud = vec![String::from("https://wrong.example.com")];

        let token = encode_claims(&claims, SECRET);
        assert!(matches!(
            verify(&token, BASE_URL, &keys()),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let mut claims = test_claims();
        claims.iat = (now - TimeDelta::hours(1)).timestamp();
        claims.nbf = claims.iat;
        claims.exp = (now - TimeDelta::seconds(1)).timestamp();

        let token = encode_claims(&claims, SECRET);
        assert!(matches!(
            verify(&token, BASE_URL, &keys()),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn rejects_not_yet_valid_token() {
        let now = Utc::now();
        let mut claims = test_claims();
        claims.nbf = (now + TimeDelta::hours(1)).timestamp();
        claims.exp = (now + TimeDelta::hours(2)).timestamp();

        let token = encode_claims(&claims, SECRET);
        assert!(matches!(
            verify(&token, BASE_URL, &keys()),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn rejects_unsupported_algorithm() {
        let claims = test_claims();
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        assert!(matches!(
            verify(&token, BASE_URL, &keys()),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            verify("bad_jwt", BASE_URL, &keys()),
            Err(Error::InvalidToken)
        ));
    }
}
