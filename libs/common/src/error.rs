//! Error types shared by everything that talks to the SQLite store

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Failures raised by the store infrastructure
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not reach the database
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// A query failed at runtime
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// The startup schema bootstrap failed
    #[error("Database schema error: {0}")]
    Schema(#[source] SqlxError),

    /// The connection URL or pool settings are unusable
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
