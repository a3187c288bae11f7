//! Error types for Joinery

use thiserror::Error;

/// The main error type for Joinery operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid statement construction
    #[error("Invalid statement: {message}")]
    InvalidStatement { message: String },

    /// Join column lists could not be paired positionally
    #[error("Join column count mismatch: {left} left columns, {right} right columns")]
    JoinColumnMismatch { left: usize, right: usize },
}

/// Convenience Result type for Joinery operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new invalid statement error
    pub fn invalid_statement(message: impl Into<String>) -> Self {
        Self::InvalidStatement {
            message: message.into(),
        }
    }

    /// Create a new join column mismatch error
    pub fn join_column_mismatch(left: usize, right: usize) -> Self {
        Self::JoinColumnMismatch { left, right }
    }
}
