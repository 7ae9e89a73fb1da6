//! The executor boundary
//!
//! An executor receives a [`QueryDescription`] and answers with either the
//! ordered documents it selects or their count. It must:
//!
//! - apply the overlay rule before filter and window
//! - return rows in exactly the order implied by the sort spec
//! - treat the window as offset + limit over the sorted, resolved sequence
//!
//! Timeouts, retries and transport concerns belong to the executor.

use async_trait::async_trait;

use crate::document::Document;
use crate::query::QueryDescription;

/// Trait for running query descriptions against a document store
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Transport or evaluation failure, passed to callers unchanged
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the documents selected by the description, in sort order
    async fn execute(&self, query: &QueryDescription) -> Result<Vec<Document>, Self::Error>;

    /// Returns the number of logical documents matching the description's filter
    async fn count(&self, query: &QueryDescription) -> Result<u64, Self::Error>;
}

#[async_trait]
impl<'a, X: QueryExecutor + ?Sized> QueryExecutor for &'a X {
    type Error = X::Error;

    async fn execute(&self, query: &QueryDescription) -> Result<Vec<Document>, Self::Error> {
        (**self).execute(query).await
    }

    async fn count(&self, query: &QueryDescription) -> Result<u64, Self::Error> {
        (**self).count(query).await
    }
}
