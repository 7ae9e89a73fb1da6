//! Query descriptions handed to an executor
//!
//! A description bundles everything one round trip needs: caller filter,
//! overlay rule, sort, optional keyset predicate, window and projection.
//! Executors evaluate it in this order:
//!
//! 1. Overlay rule (raw set -> logical set)
//! 2. Filter predicates (AND)
//! 3. Keyset predicate
//! 4. Sort
//! 5. Window (offset + limit)
//! 6. Projection

use super::ast::{Predicate, SortSpec};
use super::keyset::KeysetPredicate;
use crate::overlay::DraftOverlay;

/// Offset + limit window over the sorted, resolved sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Rows to skip
    pub offset: u64,
    /// Maximum rows to return
    pub limit: u64,
}

impl Window {
    /// The first `limit` rows
    pub fn first(limit: u64) -> Self {
        Self { offset: 0, limit }
    }

    /// Window of absolute page `page`.
    ///
    /// Returns None if the offset does not fit in a `u64`.
    pub fn page(page: u64, page_size: u64) -> Option<Self> {
        let offset = page.checked_mul(page_size)?;
        offset.checked_add(page_size)?;
        Some(Self {
            offset,
            limit: page_size,
        })
    }

    /// Exclusive end of the window
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.limit)
    }
}

/// Complete description of one query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryDescription {
    /// Caller filter (all combined with AND)
    pub filter: Vec<Predicate>,
    /// Overlay rule applied before everything else
    pub overlay: DraftOverlay,
    /// Fields to return, empty means all
    pub projection: Vec<String>,
    /// Sort order; None for counts
    pub sort: Option<SortSpec>,
    /// Seek predicate for relative navigation
    pub keyset: Option<KeysetPredicate>,
    /// Window; None returns every matching row
    pub window: Option<Window>,
}

impl QueryDescription {
    /// Creates a description with the given filter and the overlay rule
    pub fn new(filter: Vec<Predicate>) -> Self {
        Self {
            filter,
            overlay: DraftOverlay,
            projection: Vec::new(),
            sort: None,
            keyset: None,
            window: None,
        }
    }

    /// Sets the projection
    pub fn with_projection(mut self, fields: Vec<String>) -> Self {
        self.projection = fields;
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the keyset predicate
    pub fn with_keyset(mut self, keyset: KeysetPredicate) -> Self {
        self.keyset = Some(keyset);
        self
    }

    /// Sets the window
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = Some(window);
        self
    }

    /// Strips sort, keyset, window and projection, leaving what a count needs
    pub fn for_count(&self) -> Self {
        Self::new(self.filter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_window() {
        let w = Window::page(3, 10).unwrap();
        assert_eq!(w.offset, 30);
        assert_eq!(w.limit, 10);
        assert_eq!(w.end(), 40);
    }

    #[test]
    fn test_page_window_overflow() {
        assert!(Window::page(u64::MAX, 2).is_none());
        assert!(Window::page(u64::MAX / 2, 2).is_none());
        assert!(Window::page(0, u64::MAX).is_some());
    }

    #[test]
    fn test_builder() {
        let query = QueryDescription::new(vec![Predicate::eq("kind", json!("post"))])
            .with_sort(SortSpec::asc("rank"))
            .with_window(Window::first(5))
            .with_projection(vec!["title".into()]);

        assert_eq!(query.filter.len(), 1);
        assert_eq!(query.window, Some(Window::first(5)));
        assert_eq!(query.overlay, DraftOverlay);

        let count = query.for_count();
        assert!(count.sort.is_none());
        assert!(count.window.is_none());
        assert!(count.projection.is_empty());
        assert_eq!(count.filter, query.filter);
    }
}
