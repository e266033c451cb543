//! Error types for warble-server
//!
//! One flat enum covers the storage and transaction failure modes; domain
//! validation errors pass through transparently so callers can match on
//! them after any number of layers. Absence is not an error: lookups return
//! `Result<Option<T>>` and reserve `Err` for real failures.

use thiserror::Error;

use warble_core::DomainError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Domain validation failure, surfaced to the API boundary unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Backend failure, wrapped with the operation that hit it.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// `exec_tx` was called on a store already bound to a transaction.
    #[error("store is already transaction-scoped")]
    TxNotSupported,

    /// The unit of work could not be opened.
    #[error("failed to begin transaction: {0}")]
    TxBegin(#[source] sqlx::Error),

    /// The unit of work could not be committed.
    #[error("failed to commit transaction: {0}")]
    TxCommit(#[source] sqlx::Error),

    /// Rollback failed while unwinding `cause`; both errors are kept.
    #[error("rollback failed: {rollback}; original error: {cause}")]
    TxRollback {
        cause: Box<Error>,
        #[source]
        rollback: sqlx::Error,
    },

    /// The in-memory store was configured to refuse transactions.
    #[error("transaction rejected by store")]
    TxRejected,

    /// The transaction handle was still shared after the callback returned,
    /// so the unit of work could neither commit nor roll back explicitly.
    #[error("transaction handle still in use after callback completed")]
    TxHandleLeaked,

    /// Broken invariant that is reported rather than panicked on.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_stay_matchable() {
        let err: Error = DomainError::InvalidEmail.into();
        assert!(matches!(err, Error::Domain(DomainError::InvalidEmail)));
        assert_eq!(err.to_string(), "invalid email address");
    }

    #[test]
    fn rollback_error_reports_both_sides() {
        let err = Error::TxRollback {
            cause: Box::new(DomainError::InvalidAuthor.into()),
            rollback: sqlx::Error::PoolClosed,
        };
        let text = err.to_string();
        assert!(text.contains("rollback failed"));
        assert!(text.contains("invalid author id"));
    }
}
