//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A key could not be resolved to a catalog subject.
    #[error("no subject registered for key {0:?}")]
    SubjectNotFound(String),

    /// Catalog or scene data is malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// A catalog source could not be read or parsed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
