//! Route table for the API service.

use axum::routing::{get, post};
use axum::{Router, middleware};
use sw_models::db::connection::DbConnection;
use sw_web::ctx::resolver::mw_ctx_resolver;
use sw_web::mw_auth::mw_require_auth;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the service router.
///
/// The context resolver runs on every route; the access decision guards only
/// the restricted routes. The cookie manager sits outside the resolver so
/// the signed auth cookie is readable and removable from within it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/restricted", get(handlers::restricted))
        .route_layer(middleware::from_fn(mw_require_auth))
        .route("/status", get(handlers::status))
        .route(
            "/users",
            get(handlers::get_users).post(handlers::create_user),
        )
        .route(
            "/authentication-tokens",
            post(handlers::create_authentication_token),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            mw_ctx_resolver::<DbConnection>,
        ))
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
