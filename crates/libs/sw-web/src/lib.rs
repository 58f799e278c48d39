//! Web layer for the sqlwarden API.
//!
//! This library owns everything between the HTTP framework and the
//! cryptographic core: the per-request authentication context and its
//! resolver middleware, the access-decision middleware, signed/encrypted
//! cookie jar helpers, the background task group, and the mapping from
//! typed errors to HTTP responses.

pub mod cookies;
pub mod ctx;
pub mod error;
pub mod mw_auth;
pub mod prelude;
pub mod task;
pub mod traits;
