//! Translation of SeaORM errors into repository errors.

use blogly_core::error::RepoError;
use sea_orm::{DbErr, SqlErr};

/// Classify a failure of a read or of a write that cannot violate a
/// constraint.
pub(crate) fn db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// Classify a failed write, blaming `field` for unique and foreign-key
/// violations.
pub(crate) fn write_err(field: &'static str) -> impl Fn(DbErr) -> RepoError {
    move |err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepoError::constraint(field, detail),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            RepoError::constraint(field, detail)
        }
        _ => db_err(err),
    }
}
