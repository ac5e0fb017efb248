//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input at the data boundary.
/// Tree building itself never fails.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("invalid directory payload: {message}")]
    InvalidPayload { message: String },

    #[error("unknown rank: {0}")]
    UnknownRank(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
