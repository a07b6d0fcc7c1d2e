//! Error type shared by the visit query layer.

use thiserror::Error;

/// Errors surfaced by visit queries and scans.
///
/// Storage failures are carried through unchanged so callers can decide
/// whether to retry or resume a scan from their own checkpoint.
#[derive(Debug, Error)]
pub enum VisitError {
    /// The caller supplied an argument the query layer cannot honour
    /// (zero block size, negative limit or offset).
    #[error("{message}")]
    Validation { message: String },

    /// The row store failed while executing a query.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl VisitError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Returns true when the error came from the row store rather than from input checks.
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

pub type VisitResult<T> = Result<T, VisitError>;
