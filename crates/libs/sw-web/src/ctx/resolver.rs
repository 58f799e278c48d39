//! Context resolver: the per-request authentication gate.
//!
//! The resolver inspects the request's credential material — the
//! `Authorization` header first, then the signed auth cookie — verifies it,
//! resolves the token subject through the user store, and records the
//! outcome as a [`MaybeCtx`] request extension.
//!
//! A missing credential is not an error: the request proceeds anonymously
//! and the access decision downstream may still reject it. A malformed or
//! forged credential terminates the request with a single coarse 401. A
//! store failure is a server fault, distinct from an authentication
//! rejection.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use sw_auth::cookie::signed::MacKey;
use sw_auth::token::{TokenKeys, verify};
use sw_auth::{AUTH_HEADER, AUTH_HEADER_PREFIX, error::Error as AuthError};
use tower_cookies::Cookies;

use crate::cookies;
use crate::ctx::{Ctx, MaybeCtx};
use crate::prelude::*;
use crate::traits::user_store::UserStore;

/// The name of the cookie used to carry authentication tokens.
pub const AUTH_TOKEN_COOKIE: &str = "sw-auth-token";

/// Immutable per-process authentication state shared by the resolver.
///
/// Constructed once at startup from configuration and cloned into the
/// middleware; all fields are read-only for the process lifetime.
#[derive(Clone)]
pub struct AuthState<S> {
    /// Token signing/verification keys.
    pub keys: Arc<TokenKeys>,
    /// Key for the signed auth cookie.
    pub cookie_key: MacKey,
    /// Configured issuer and audience identity.
    pub base_url: String,
    /// User store collaborator.
    pub store: S,
}

/// Middleware resolving the request context from a bearer credential.
///
/// On success the outcome is attached to the request as a [`MaybeCtx`]
/// extension; the inner service always runs for anonymous requests, while
/// invalid credentials terminate the request with a 401 before the inner
/// service is reached.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, middleware};
/// use sw_models::db::connection::DbConnection;
/// use sw_web::ctx::resolver::{AuthState, mw_ctx_resolver};
///
/// # fn example(auth: AuthState<DbConnection>) {
/// let app: Router<()> = Router::new().layer(middleware::from_fn_with_state(
///     auth,
///     mw_ctx_resolver::<DbConnection>,
/// ));
/// # }
/// ```
pub async fn mw_ctx_resolver<S>(
    State(auth): State<AuthState<S>>,
    cookies: Cookies,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response>
where
    S: UserStore + Clone + Send + Sync + 'static,
{
    let token = match bearer_token(req.headers()) {
        Some(token) => Some(token?),
        None => cookie_token(&cookies, &auth.cookie_key).transpose()?,
    };

    let ctx = match token {
        None => MaybeCtx(None),
        Some(token) => {
            let claims = verify(&token, &auth.base_url, &auth.keys)?;
            let user_id: i64 = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

            match auth.store.find_user_by_id(user_id)? {
                None => MaybeCtx(None),
                Some(user) => MaybeCtx(Some(Ctx::new(user))),
            }
        }
    };

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

/// Extracts the bearer credential from the `Authorization` header.
///
/// Returns `None` when the header is absent. A present header must match
/// `Bearer <token>` exactly (case-sensitive scheme, single space); any other
/// form is an invalid token, not a missing one.
fn bearer_token(headers: &HeaderMap) -> Option<Result<String>> {
    let header = headers.get(AUTH_HEADER)?;

    Some(
        header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(AUTH_HEADER_PREFIX))
            .map(String::from)
            .ok_or(Error::Auth(AuthError::InvalidToken)),
    )
}

/// Extracts the bearer credential from the signed auth cookie.
///
/// Returns `None` when the cookie is absent. A cookie that fails signature
/// verification is removed from the jar before the rejection propagates, so
/// the failure clears itself on the client's next request.
fn cookie_token(cookies: &Cookies, key: &MacKey) -> Option<Result<String>> {
    let outcome = match cookies::read_signed(cookies, AUTH_TOKEN_COOKIE, key) {
        Ok(None) => return None,
        Ok(Some(value)) => {
            String::from_utf8(value).map_err(|_| Error::Auth(AuthError::InvalidValue))
        }
        Err(err) => Err(err),
    };

    if outcome.is_err() {
        cookies.remove(tower_cookies::Cookie::from(AUTH_TOKEN_COOKIE));
    }
    Some(outcome)
}

/// Signs the issued token into the auth cookie.
pub fn set_auth_cookie(cookies: &Cookies, token: &str, key: &MacKey) -> Result<()> {
    let cookie = sw_auth::cookie::Cookie::new(AUTH_TOKEN_COOKIE, token);
    cookies::add_signed(cookies, &cookie, key)
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<MaybeCtx>()
            .ok_or(Error::CtxMissing)?
            .0
            .clone()
            .ok_or(Error::AuthenticationRequired)
    }
}
