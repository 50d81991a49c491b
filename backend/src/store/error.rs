use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by the city store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The caller handed the store something it cannot persist.
    #[error("{0}")]
    Validation(String),
    /// SQLite refused the operation or could not be reached.
    #[error("{0}")]
    Storage(#[from] rusqlite::Error),
    /// The blocking worker running the query did not complete.
    #[error("storage task failed: {0}")]
    Task(String),
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}
