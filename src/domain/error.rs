//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Error)]
pub enum DomainError {
    /// Storage/session error surfaced by the storage facade
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
