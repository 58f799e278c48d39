//! Mailer error types.

/// Email construction and delivery errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Malformed sender or recipient address.
    #[error(transparent)]
    Address(#[from] lettre::address::AddressError),

    /// Message construction error.
    #[error(transparent)]
    Content(#[from] lettre::error::Error),

    /// SMTP transport error.
    #[error(transparent)]
    Smtp(#[from] lettre::transport::smtp::Error),
}
