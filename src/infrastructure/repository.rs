//! Storage error type.

use thiserror::Error;

use crate::domain::UnknownVariant;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The database rejected or failed a statement.
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// A stored row holds a value outside the fixed enumerations.
    #[error("Corrupt todo row {id}: {source}")]
    CorruptRow {
        id: i64,
        #[source]
        source: UnknownVariant,
    },
}
