//! Executor error types
//!
//! Error codes:
//! - DOCPAGER_EXECUTION_FAILED
//! - DOCPAGER_INVALID_QUERY
//! - DOCPAGER_EXECUTOR_UNAVAILABLE

use std::fmt;

/// Executor error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorErrorCode {
    /// General execution failure
    ExecutionFailed,
    /// The description cannot be evaluated as written
    InvalidQuery,
    /// The backing store could not be reached
    Unavailable,
}

impl ExecutorErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ExecutorErrorCode::ExecutionFailed => "DOCPAGER_EXECUTION_FAILED",
            ExecutorErrorCode::InvalidQuery => "DOCPAGER_INVALID_QUERY",
            ExecutorErrorCode::Unavailable => "DOCPAGER_EXECUTOR_UNAVAILABLE",
        }
    }

    /// Returns true if retrying the same round trip may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, ExecutorErrorCode::Unavailable)
    }
}

impl fmt::Display for ExecutorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error raised by the bundled executors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorError {
    /// Error code
    code: ExecutorErrorCode,
    /// Human-readable message
    message: String,
}

impl ExecutorError {
    /// Create an execution failed error
    pub fn execution_failed(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::ExecutionFailed,
            message: reason.into(),
        }
    }

    /// Create an invalid query error
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::InvalidQuery,
            message: reason.into(),
        }
    }

    /// Create an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            code: ExecutorErrorCode::Unavailable,
            message: reason.into(),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ExecutorErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ExecutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ExecutorError {}

/// Result type for executor operations
pub type ExecutorResult<T> = Result<T, ExecutorError>;
