//! In-memory executor
//!
//! Holds a raw document set and evaluates descriptions in strict order:
//! 1. Resolve the overlay rule over the whole raw set
//! 2. Filter according to predicates
//! 3. Apply the keyset predicate
//! 4. Sort
//! 5. Apply the window
//! 6. Project

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::errors::{ExecutorError, ExecutorResult};
use super::executor::QueryExecutor;
use super::filters::PredicateFilter;
use super::sorter::ResultSorter;
use crate::document::Document;
use crate::overlay::DraftOverlay;
use crate::query::QueryDescription;

/// Executor over a raw document set held in memory
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    documents: Vec<Document>,
    round_trips: AtomicU64,
    fail_next: Mutex<Option<ExecutorError>>,
    last_query: Mutex<Option<QueryDescription>>,
}

impl MemoryExecutor {
    /// Creates an executor over the given raw documents
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents,
            ..Self::default()
        }
    }

    /// Adds or replaces a raw document
    pub fn insert(&mut self, doc: Document) {
        match self.documents.iter_mut().find(|d| d.id() == doc.id()) {
            Some(existing) => *existing = doc,
            None => self.documents.push(doc),
        }
    }

    /// Removes a raw document, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Document> {
        let pos = self.documents.iter().position(|d| d.id().as_str() == id)?;
        Some(self.documents.remove(pos))
    }

    /// Number of raw documents, drafts included
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the raw set is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Makes the next round trip fail with `error`
    pub fn fail_next(&self, error: ExecutorError) {
        *self.fail_next.lock().unwrap_or_else(|e| e.into_inner()) = Some(error);
    }

    /// Number of round trips served so far, failed ones included
    pub fn round_trips(&self) -> u64 {
        self.round_trips.load(Ordering::SeqCst)
    }

    /// The most recent description received
    pub fn last_query(&self) -> Option<QueryDescription> {
        self.last_query
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Records the round trip and consumes any injected failure
    fn begin(&self, query: &QueryDescription) -> ExecutorResult<()> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap_or_else(|e| e.into_inner()) = Some(query.clone());

        match self.fail_next.lock().unwrap_or_else(|e| e.into_inner()).take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Steps 1-3: overlay, filter and keyset
    fn select(&self, query: &QueryDescription) -> Vec<Document> {
        DraftOverlay::resolve(&self.documents)
            .into_iter()
            .filter(|doc| PredicateFilter::matches(doc, &query.filter))
            .filter(|doc| {
                query
                    .keyset
                    .as_ref()
                    .map_or(true, |k| PredicateFilter::matches_keyset(doc, k))
            })
            .collect()
    }

    fn run(&self, query: &QueryDescription) -> ExecutorResult<Vec<Document>> {
        if query.window.is_some() && query.sort.is_none() {
            return Err(ExecutorError::invalid_query(
                "window requires a sort specification",
            ));
        }

        let mut selected = self.select(query);

        if let Some(sort) = &query.sort {
            ResultSorter::sort(&mut selected, sort);
        }

        let selected: Vec<Document> = match query.window {
            Some(window) => {
                let offset = usize::try_from(window.offset).unwrap_or(usize::MAX);
                let limit = usize::try_from(window.limit).unwrap_or(usize::MAX);
                selected.into_iter().skip(offset).take(limit).collect()
            }
            None => selected,
        };

        Ok(selected
            .iter()
            .map(|doc| doc.project(&query.projection))
            .collect())
    }
}

#[async_trait]
impl QueryExecutor for MemoryExecutor {
    type Error = ExecutorError;

    async fn execute(&self, query: &QueryDescription) -> ExecutorResult<Vec<Document>> {
        self.begin(query)?;
        self.run(query)
    }

    async fn count(&self, query: &QueryDescription) -> ExecutorResult<u64> {
        self.begin(query)?;
        Ok(self.select(query).len() as u64)
    }
}
