use parkhub_core::error::CoreError;

/// Error type returned by the reservation core and repositories that mix
/// domain outcomes with storage access.
///
/// Plain CRUD repositories return `sqlx::Error` directly (their only failure
/// mode is storage); the ledger, engine, and guard return `DbError` so that
/// expected domain outcomes (`NoCapacity`, `AlreadyReleased`, delete-guard
/// rejections) stay typed all the way up to the API layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// True when the error is a lost concurrency race the caller may retry:
    /// a serialization failure, a deadlock, or a unique violation on the
    /// active-reservation index.
    pub fn is_retryable_conflict(&self) -> bool {
        match self {
            DbError::Domain(CoreError::Conflict(_)) => true,
            DbError::Storage(sqlx::Error::Database(db_err)) => {
                matches!(db_err.code().as_deref(), Some("40001") | Some("40P01"))
                    || db_err.constraint() == Some("uq_reservations_active_spot")
            }
            _ => false,
        }
    }
}
