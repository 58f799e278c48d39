//! Database error types.

use diesel::result::DatabaseErrorKind;

/// Database operation errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An insert collided with the unique email index.
    #[error("Email already in use")]
    DuplicateEmail,

    /// Database connection pool error.
    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    /// Diesel ORM operation error.
    #[error(transparent)]
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                Self::DuplicateEmail
            }
            value => Self::Diesel(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_duplicate_email() {
        let err = diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key value violates unique constraint")),
        );

        assert!(matches!(Error::from(err), Error::DuplicateEmail));
    }

    #[test]
    fn other_database_errors_pass_through() {
        let err = diesel::result::Error::NotFound;

        assert!(matches!(Error::from(err), Error::Diesel(_)));
    }
}
