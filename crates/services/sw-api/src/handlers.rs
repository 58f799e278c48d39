//! Request handlers for the API routes.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use chrono::SecondsFormat;
use serde::Deserialize;
use serde_json::{Value, json};
use sw_auth::password;
use sw_auth::token::{AUTH_TOKEN_TTL, sign};
use sw_models::user::{NewUser, User};
use sw_validator::Validator;
use sw_validator::helpers::{RGX_EMAIL, matches, max_chars, min_chars, not_in};
use sw_web::ctx::resolver::set_auth_cookie;
use sw_web::prelude::*;
use tower_cookies::Cookies;

use crate::state::AppState;

/// Credentials submitted on registration and login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Password", default)]
    pub password: String,
}

pub async fn status() -> Json<Value> {
    Json(json!({"Status": "OK"}))
}

pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(User::fetch_all(&state.db)?))
}

pub async fn create_user(
    State(state): State<AppState>,
    payload: core::result::Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(input) = payload?;

    let existing = User::fetch_by_email(&input.email, &state.db)?;

    let mut v = Validator::new();
    v.check_field(!input.email.is_empty(), "Email", "Email is required");
    v.check_field(
        matches(&input.email, &RGX_EMAIL),
        "Email",
        "Must be a valid email address",
    );
    v.check_field(existing.is_none(), "Email", "Email is already in use");

    v.check_field(!input.password.is_empty(), "Password", "Password is required");
    v.check_field(
        min_chars(&input.password, 8),
        "Password",
        "Password is too short",
    );
    v.check_field(
        max_chars(&input.password, 72),
        "Password",
        "Password is too long",
    );
    v.check_field(
        not_in(&input.password.as_str(), password::COMMON_PASSWORDS),
        "Password",
        "Password is too common",
    );

    if v.has_errors() {
        return Err(Error::FailedValidation(v));
    }

    let hashed_password = password::hash(&input.password)?;
    let user = NewUser {
        email: input.email,
        hashed_password,
    }
    .create(&state.db)?;

    if !state.config.notifications_email.is_empty() {
        let mailer = state.mailer.clone();
        let recipient = state.config.notifications_email.clone();
        let email = user.email.clone();
        state.tasks.spawn(async move {
            mailer
                .send(
                    &recipient,
                    "New user registration",
                    &format!("A new user has registered with the email address {email}."),
                )
                .await
        });
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_authentication_token(
    State(state): State<AppState>,
    cookies: Cookies,
    payload: core::result::Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(input) = payload?;

    let user = User::fetch_by_email(&input.email, &state.db)?;

    let mut v = Validator::new();
    v.check_field(!input.email.is_empty(), "Email", "Email is required");
    v.check_field(user.is_some(), "Email", "Email address could not be found");

    let Some(user) = user else {
        return Err(Error::FailedValidation(v));
    };

    let password_matches = password::matches(&input.password, &user.hashed_password)?;
    v.check_field(!input.password.is_empty(), "Password", "Password is required");
    v.check_field(password_matches, "Password", "Password is incorrect");

    if v.has_errors() {
        return Err(Error::FailedValidation(v));
    }

    let (token, expiry) = sign(
        user.id,
        &state.config.base_url,
        AUTH_TOKEN_TTL,
        &state.auth.keys,
    )?;
    set_auth_cookie(&cookies, &token, &state.auth.cookie_key)?;

    Ok(Json(json!({
        "AuthenticationToken": token,
        "AuthenticationTokenExpiry": expiry.to_rfc3339_opts(SecondsFormat::Secs, true),
    })))
}

pub async fn restricted() -> Json<Value> {
    Json(json!({"Message": "This is a restricted handler"}))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"Error": "The requested resource could not be found"})),
    )
}

pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"Error": format!("The {method} method is not supported for this resource")})),
    )
}
