//! Error types for the Quercus library.

use thiserror::Error;

/// Errors raised while loading the index, resolving pages, or validating
/// queries.
#[derive(Error, Debug)]
pub enum QuercusError {
    /// I/O failure while reading the index or a page file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed query: an operator in a forbidden position.
    #[error("query error: {0}")]
    Query(String),

    /// Malformed or unreadable index data.
    #[error("index error: {0}")]
    Index(String),

    /// The page directory or a page file is not usable.
    #[error("page store error: {0}")]
    Store(String),

    /// A requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

impl QuercusError {
    /// Create a query error.
    pub fn query<S: Into<String>>(message: S) -> Self {
        QuercusError::Query(message.into())
    }

    /// Create an index error.
    pub fn index<S: Into<String>>(message: S) -> Self {
        QuercusError::Index(message.into())
    }

    /// Create a page store error.
    pub fn store<S: Into<String>>(message: S) -> Self {
        QuercusError::Store(message.into())
    }

    /// Create a not-found error.
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        QuercusError::NotFound(message.into())
    }
}

/// Result type alias using [`QuercusError`].
pub type Result<T> = std::result::Result<T, QuercusError>;
