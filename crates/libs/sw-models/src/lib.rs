//! Database models and ORM layer for the sqlwarden API.
//!
//! Provides the Diesel-based user model, connection pooling and embedded
//! migrations. The authentication gate consumes this crate only through the
//! narrow lookup-by-id operation; handlers additionally use the email lookup
//! and insert operations.

pub mod db;
pub mod error;
pub mod prelude;
pub mod user;
mod schema;
