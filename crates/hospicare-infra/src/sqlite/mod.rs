//! SQLite storage layer.
//!
//! Repository implementations backed by SQLite with WAL mode and split
//! read/write connection pools. Each operation executes exactly one
//! parameterized statement.

pub mod admission;
pub mod patient;
pub mod pool;
pub mod treatment;

use hospicare_types::error::RepositoryError;

/// Translate a sqlx error into the repository taxonomy. SQLite reports
/// constraint failures (FOREIGN KEY, UNIQUE, NOT NULL) as database errors
/// whose message names the violated constraint.
fn map_db_err(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) if db_err.message().contains("constraint") => {
            RepositoryError::Constraint(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => RepositoryError::Connection,
        other => RepositoryError::Query(other.to_string()),
    }
}
