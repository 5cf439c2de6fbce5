//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DomainError, Key};

/// Application errors wrap domain errors and add front-end context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid choice: {0}")]
    InvalidChoice(Key),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
