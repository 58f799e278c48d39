//! User account model.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use crate::db::connection::DbConnection;
use crate::prelude::*;
use crate::schema::users::dsl;

diesel::define_sql_function! {
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// A registered user account.
///
/// The hashed password never appears in serialized output.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// When this account was created.
    pub created: DateTime<Utc>,
    /// Email address used for login.
    pub email: String,
    /// Argon2 hash of the account password.
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// Data for creating a new user account.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    /// Email address used for login.
    pub email: String,
    /// Argon2 hash of the account password.
    pub hashed_password: String,
}

impl NewUser {
    /// Creates the user in the database.
    ///
    /// Fails with [`Error::DuplicateEmail`] when the email address is already
    /// registered (case-insensitively).
    pub fn create(self, connection: &DbConnection) -> Result<User> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(dsl::users)
            .values(&self)
            .returning(User::as_returning())
            .get_result(conn)?)
    }
}

impl User {
    /// Fetches a user by ID, returning `None` when the account does not
    /// exist.
    pub fn fetch_by_id(target: i64, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(dsl::users
            .find(target)
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    /// Fetches a user by email address, case-insensitively.
    pub fn fetch_by_email(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(dsl::users
            .filter(lower(dsl::email).eq(target.to_lowercase()))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    }

    /// Fetches all users, newest first.
    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;

        Ok(dsl::users
            .order(dsl::created.desc())
            .select(User::as_select())
            .load(conn)?)
    }

    /// Replaces the stored password hash for an account.
    pub fn update_hashed_password(
        target: i64,
        hashed_password: &str,
        connection: &DbConnection,
    ) -> Result<()> {
        let conn = &mut connection.pool.get()?;

        diesel::update(dsl::users.find(target))
            .set(dsl::hashed_password.eq(hashed_password))
            .execute(conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_omits_the_password_hash() {
        let user = User {
            id: 1,
            created: Utc::now(),
            email: String::from("alice@example.com"),
            hashed_password: String::from("$argon2id$v=19$secret"),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("alice@example.com"));
        assert!(!json.contains("argon2id"));
    }
}
