//! Error types for crudsql

use thiserror::Error;

/// Result type alias for builder operations
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Error types raised by the statement builders
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required argument violated its precondition (blank table name,
    /// empty row collection, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A method was called outside the state that licenses it
    #[error("Illegal state: {0}")]
    IllegalState(String),
}

impl BuilderError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an illegal-state error
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState(message.into())
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an illegal-state error
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState(_))
    }
}
