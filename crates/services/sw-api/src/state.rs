//! Shared application state.

use std::sync::Arc;

use sw_mailer::Mailer;
use sw_models::db::connection::DbConnection;
use sw_web::ctx::resolver::AuthState;
use sw_web::task::TaskGroup;

use crate::config::Config;

/// Immutable state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Authentication state consumed by the context resolver.
    pub auth: AuthState<DbConnection>,
    /// Database connection pool.
    pub db: DbConnection,
    /// Notification mailer.
    pub mailer: Mailer,
    /// Background task tracking for graceful shutdown.
    pub tasks: TaskGroup,
    /// Service configuration.
    pub config: Arc<Config>,
}
