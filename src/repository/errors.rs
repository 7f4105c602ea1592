use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying Diesel query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A connection could not be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// A persisted row violated a domain constraint during conversion.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from repository methods.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
