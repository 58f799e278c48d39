//! Common types and utilities.

/// Mailer error type.
pub use crate::error::Error;

/// Mailer result type.
pub type Result<T> = core::result::Result<T, Error>;
