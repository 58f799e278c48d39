//! Error types for the API service startup path.
//!
//! Request-time errors are handled by `sw_web::error::Error`; this type only
//! covers failures before the server is accepting traffic.

/// Errors that can occur while starting the API service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Mailer(#[from] sw_mailer::error::Error),

    #[error("Invalid value for environment variable {0}")]
    InvalidEnv(String),
}
