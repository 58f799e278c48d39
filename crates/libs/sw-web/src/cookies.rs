//! Signed and encrypted cookies on the tower-cookies jar.
//!
//! Thin adapters between the pure cookie codecs in `sw_auth::cookie` and the
//! request/response cookie jar. Reading a missing cookie yields `Ok(None)`;
//! a cookie that is present but fails verification is an error the caller
//! decides how to handle.

use sw_auth::cookie::Cookie;
use sw_auth::cookie::sealed::{self, CipherKey};
use sw_auth::cookie::signed::{self, MacKey};
use tower_cookies::Cookies;

use crate::prelude::*;

/// Signs a cookie value and adds it to the response jar.
pub fn add_signed(cookies: &Cookies, cookie: &Cookie, key: &MacKey) -> Result<()> {
    let wire = signed::write(cookie, key)?;
    cookies.add(tower_cookies::Cookie::new(cookie.name.clone(), wire));
    Ok(())
}

/// Reads and verifies a signed cookie from the request jar.
pub fn read_signed(cookies: &Cookies, name: &str, key: &MacKey) -> Result<Option<Vec<u8>>> {
    let Some(cookie) = cookies.get(name) else {
        return Ok(None);
    };
    Ok(Some(signed::read(cookie.value(), name, key)?))
}

/// Encrypts a cookie value and adds it to the response jar.
pub fn add_sealed(cookies: &Cookies, cookie: &Cookie, key: &CipherKey) -> Result<()> {
    let wire = sealed::write(cookie, key)?;
    cookies.add(tower_cookies::Cookie::new(cookie.name.clone(), wire));
    Ok(())
}

/// Reads and decrypts a sealed cookie from the request jar.
pub fn read_sealed(cookies: &Cookies, name: &str, key: &CipherKey) -> Result<Option<Vec<u8>>> {
    let Some(cookie) = cookies.get(name) else {
        return Ok(None);
    };
    Ok(Some(sealed::read(cookie.value(), name, key)?))
}
