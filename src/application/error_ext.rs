//! Error conversion helpers for output operations
//!
//! Provides an extension trait for attaching context to I/O failures.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{}", line).with_context("write row 3")?;
    /// ```
    fn with_context(self, action: impl Into<String>) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context(self, action: impl Into<String>) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: action.into(),
            source: Box::new(e),
        })
    }
}
