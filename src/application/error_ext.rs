//! Error conversion helpers for console I/O
//!
//! Provides an extension trait for attaching what the session was doing to an I/O error.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add action context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// self.output.flush().with_context("flush prompt")?;
    /// ```
    fn with_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.to_string(),
            source: Box::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_keeps_source() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::UnexpectedEof, "gone"));

        let err = result.with_context("read choice").unwrap_err();

        assert_eq!(err.to_string(), "operation failed: read choice");
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("gone"));
    }
}
