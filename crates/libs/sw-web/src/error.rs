//! Main Crate Error

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use serde_json::json;
use tracing::error;

const SERVER_ERROR_MESSAGE: &str =
    "The server encountered a problem and could not process your request";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] sw_auth::error::Error),

    #[error(transparent)]
    Models(#[from] sw_models::error::Error),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error("Failed Validation")]
    FailedValidation(sw_validator::Validator),

    /* Api Errors */
    #[error("Authentication Required")]
    AuthenticationRequired,

    /// The access decision ran without the context resolver having executed
    /// on this request. The gate fails closed rather than assuming ordering.
    #[error("Context Missing")]
    CtxMissing,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);

        let (status, message) = match self {
            Error::FailedValidation(validator) => {
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(validator)).into_response();
            }
            Error::JsonRejection(rejection) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"Error": rejection.body_text()})),
                )
                    .into_response();
            }
            Error::Auth(err) => match err {
                sw_auth::error::Error::InvalidToken
                | sw_auth::error::Error::InvalidValue
                | sw_auth::error::Error::ValueTooLong
                | sw_auth::error::Error::Decode(_) => {
                    (StatusCode::UNAUTHORIZED, "Invalid authentication token")
                }
                sw_auth::error::Error::TokenCreation(_)
                | sw_auth::error::Error::AuthTokenCreation
                | sw_auth::error::Error::InvalidKeyLength
                | sw_auth::error::Error::PasswordHash(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
                }
            },
            Error::AuthenticationRequired | Error::CtxMissing => (
                StatusCode::UNAUTHORIZED,
                "You must be authenticated to access this resource",
            ),
            Error::Models(sw_models::error::Error::DuplicateEmail) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "Email is already in use")
            }
            Error::Models(_) => (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE),
        };

        let mut response = (status, Json(json!({"Error": message}))).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(sw_auth::AUTH_SCHEME),
            );
        }
        response
    }
}
