use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-level failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with this id is already stored.
    #[error("duplicate id: {0}")]
    Duplicate(String),

    /// No record with this id is stored.
    #[error("missing id: {0}")]
    Missing(String),

    /// A writer panicked while holding the lock.
    #[error("store lock poisoned")]
    Poisoned,
}
