//! Error conversion helpers for directory I/O
//!
//! Provides extension traits for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to a directory I/O error.
    ///
    /// # Example
    /// ```ignore
    /// self.directory.family(id)
    ///     .with_context(|| format!("fetch family of {id}"))?;
    /// ```
    fn with_context<F: FnOnce() -> String>(self, context: F) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_context<F: FnOnce() -> String>(self, context: F) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Directory {
            context: context(),
            source: e,
        })
    }
}
