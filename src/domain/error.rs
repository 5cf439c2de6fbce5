//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::node::Key;

/// Non-fatal outcomes of tree operations, for callers that prefer a `Result`
/// over the boolean signals of the core API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("key not found: {0}")]
    KeyNotFound(Key),

    #[error("duplicate key ignored: {0}")]
    DuplicateKey(Key),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
