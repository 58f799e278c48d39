//! User lookup interface consumed by the authentication gate.

use sw_models::db::connection::DbConnection;
use sw_models::user::User;

/// Narrow read interface the context resolver uses to turn a verified token
/// subject into a user record.
///
/// Lookups go to the backing store on every request; results are never cached
/// across requests, so deletions and permission changes take effect on the
/// next request.
pub trait UserStore {
    /// Fetches a user by ID, returning `None` when the account does not
    /// exist.
    fn find_user_by_id(&self, id: i64) -> sw_models::prelude::Result<Option<User>>;
}

impl UserStore for DbConnection {
    fn find_user_by_id(&self, id: i64) -> sw_models::prelude::Result<Option<User>> {
        User::fetch_by_id(id, self)
    }
}
