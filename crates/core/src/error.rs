//! Domain error model.

use thiserror::Error;

use crate::validation::Violation;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// lookups, conflicts). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request body field failed validation.
    #[error("validation failed: {0}")]
    Validation(Violation),

    /// A path or query parameter could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A requested resource was not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A resource with the same identity already exists.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

impl From<Violation> for DomainError {
    fn from(v: Violation) -> Self {
        Self::Validation(v)
    }
}
