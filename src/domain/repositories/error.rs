//! Error type shared by every repository port.

use thiserror::Error;

/// Failure reported by a persistence adapter.
///
/// `NotFound` is the distinguished "no such record" signal; everything else is
/// a storage fault.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("unique constraint violation: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl RepositoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(e, sqlx::Error::RowNotFound) {
            return Self::NotFound;
        }

        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return Self::Conflict(db.constraint().unwrap_or("unknown").to_string());
        }

        Self::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_errors_are_storage_faults() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
