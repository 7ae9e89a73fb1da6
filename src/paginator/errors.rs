//! Paginator error types

use thiserror::Error;

/// Result type for paginator operations
pub type PageResult<T, E> = Result<T, PageError<E>>;

/// Paginator errors, generic over the executor's error type
#[derive(Debug, Error)]
pub enum PageError<E: std::error::Error + 'static> {
    /// The absolute page offset does not fit in a `u64`
    #[error("page {page} with page size {page_size} overflows the window offset")]
    WindowOverflow { page: u64, page_size: u64 },

    /// The executor rejected the round trip
    #[error(transparent)]
    Executor(E),
}

impl<E: std::error::Error + 'static> PageError<E> {
    /// Returns the executor error, if that is what this is
    pub fn executor_error(&self) -> Option<&E> {
        match self {
            PageError::Executor(e) => Some(e),
            _ => None,
        }
    }

    /// Unwraps into the executor error, if that is what this is
    pub fn into_executor_error(self) -> Option<E> {
        match self {
            PageError::Executor(e) => Some(e),
            _ => None,
        }
    }

    /// Returns true if the caller broke the contract before any round trip
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, PageError::WindowOverflow { .. })
    }
}
