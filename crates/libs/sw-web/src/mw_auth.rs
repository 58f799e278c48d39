//! Access-decision middleware.
//!
//! The terminal gate for protected routes: it performs no cryptographic work
//! of its own and only consults the context resolved earlier in the request
//! pipeline. If the resolver never ran, the [`Ctx`] extractor rejects with
//! `CtxMissing`, so the gate fails closed instead of assuming ordering.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::ctx::Ctx;
use crate::prelude::*;

/// Middleware that requires an authenticated identity for a route.
///
/// Anonymous requests are rejected with a 401 carrying a `WWW-Authenticate:
/// Bearer` challenge.
///
/// # Examples
///
/// ```rust
/// use axum::{Router, middleware, routing::get};
/// use sw_web::mw_auth::mw_require_auth;
///
/// let app: Router<()> = Router::new()
///     .route("/restricted", get(restricted_handler))
///     .route_layer(middleware::from_fn(mw_require_auth));
///
/// async fn restricted_handler() -> &'static str {
///     "This requires authentication"
/// }
/// ```
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}
