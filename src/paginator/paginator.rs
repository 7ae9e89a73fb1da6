//! Keyset paginator
//!
//! Navigation flow:
//! 1. Build a query description (filter, overlay, sort, window, keyset)
//! 2. Submit it to the executor in exactly one round trip
//! 3. On success with rows, re-anchor the cursor on the page boundaries
//! 4. Return the rows in configured sort order
//!
//! A failed round trip or an empty page leaves the cursor as it was.

use super::config::{ConfigError, PaginatorConfig};
use super::cursor::Cursor;
use super::errors::{PageError, PageResult};
use crate::document::Document;
use crate::executor::QueryExecutor;
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::query::{ExplainQuery, KeysetPredicate, QueryDescription, SortSpec, Window};

/// Cursor-based paginator over one sort configuration and page size.
///
/// Navigation methods take `&mut self`, so calls on one paginator are
/// serialized by construction. Use one paginator per concurrent stream.
pub struct Paginator<X: QueryExecutor> {
    executor: X,
    config: PaginatorConfig,
    sort: SortSpec,
    cursor: Cursor,
}

impl<X: QueryExecutor> Paginator<X> {
    /// Creates a paginator, rejecting an invalid config before any round trip
    pub fn new(executor: X, config: PaginatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let page_size = config.page_size.to_string();
        log_event_with_fields(
            Event::PaginatorCreated,
            &[
                ("direction", config.direction.as_str()),
                ("page_size", page_size.as_str()),
                ("sort_field", config.sort_field.as_str()),
            ],
        );

        Ok(Self {
            sort: config.sort_spec(),
            executor,
            config,
            cursor: Cursor::Fresh,
        })
    }

    /// Returns the config
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// Returns the page size
    pub fn page_size(&self) -> u64 {
        self.config.page_size
    }

    /// Returns the cursor
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Best-effort index of the current page
    pub fn current_page(&self) -> Option<u64> {
        self.cursor.current_page()
    }

    /// Returns the executor
    pub fn executor(&self) -> &X {
        &self.executor
    }

    /// Drops the cursor back to fresh
    pub fn reset(&mut self) {
        self.cursor = Cursor::Fresh;
        log_event_with_fields(
            Event::CursorReset,
            &[("sort_field", self.config.sort_field.as_str())],
        );
    }

    /// Fetches absolute page `page`.
    ///
    /// Uses an offset window, so cost grows with `page * page_size`.
    pub async fn get_page(&mut self, page: u64) -> PageResult<Vec<Document>, X::Error> {
        let page_size = self.config.page_size;
        let window =
            Window::page(page, page_size).ok_or(PageError::WindowOverflow { page, page_size })?;

        let query = self
            .base_query()
            .with_sort(self.sort.clone())
            .with_window(window);

        let rows = self.fetch(&query).await?;
        self.settle(page, rows)
    }

    /// Fetches the page after the current one.
    ///
    /// From a fresh cursor this is `get_page(0)`.
    pub async fn next_page(&mut self) -> PageResult<Vec<Document>, X::Error> {
        let (page, upper) = match self.cursor.clone() {
            Cursor::Fresh => return self.fallback("next").await,
            Cursor::Positioned { page, upper, .. } => (page, upper),
        };

        let query = self
            .base_query()
            .with_keyset(KeysetPredicate::after(&self.sort, upper))
            .with_sort(self.sort.clone())
            .with_window(Window::first(self.config.page_size));

        let rows = self.fetch(&query).await?;
        self.settle(page.saturating_add(1), rows)
    }

    /// Fetches the page before the current one.
    ///
    /// Queries in the reversed order and flips the result, so output is in
    /// configured order. From a fresh cursor this is `get_page(0)`.
    pub async fn previous_page(&mut self) -> PageResult<Vec<Document>, X::Error> {
        let (page, lower) = match self.cursor.clone() {
            Cursor::Fresh => return self.fallback("previous").await,
            Cursor::Positioned { page, lower, .. } => (page, lower),
        };

        let query = self
            .base_query()
            .with_keyset(KeysetPredicate::before(&self.sort, lower))
            .with_sort(self.sort.reversed())
            .with_window(Window::first(self.config.page_size));

        let mut rows = self.fetch(&query).await?;
        rows.reverse();
        self.settle(page.saturating_sub(1), rows)
    }

    /// Number of pages of the logical, filtered set. Leaves the cursor alone.
    pub async fn num_pages(&self) -> PageResult<u64, X::Error> {
        let query = self.base_query().for_count();
        self.log_submitted(&query);

        let count = match self.executor.count(&query).await {
            Ok(count) => count,
            Err(e) => return Err(self.executor_failed(e)),
        };
        let pages = count.div_ceil(self.config.page_size);

        let (count_str, pages_str) = (count.to_string(), pages.to_string());
        log_event_with_fields(
            Event::PagesCounted,
            &[("documents", count_str.as_str()), ("pages", pages_str.as_str())],
        );
        Ok(pages)
    }

    async fn fallback(&mut self, direction: &str) -> PageResult<Vec<Document>, X::Error> {
        log_event_with_fields(Event::CursorFallback, &[("requested", direction)]);
        self.get_page(0).await
    }

    /// Filter, overlay and projection shared by every query
    fn base_query(&self) -> QueryDescription {
        QueryDescription::new(self.config.filter.clone())
            .with_projection(self.config.effective_projection())
    }

    async fn fetch(&self, query: &QueryDescription) -> PageResult<Vec<Document>, X::Error> {
        self.log_submitted(query);
        self.executor
            .execute(query)
            .await
            .map_err(|e| self.executor_failed(e))
    }

    /// Re-anchors the cursor on a non-empty page and hands the rows back
    fn settle(&mut self, page: u64, rows: Vec<Document>) -> PageResult<Vec<Document>, X::Error> {
        let page_str = page.to_string();
        if self.cursor.reposition(page, &rows, &self.config.sort_field) {
            let rows_str = rows.len().to_string();
            log_event_with_fields(
                Event::PageFetched,
                &[("page", page_str.as_str()), ("rows", rows_str.as_str())],
            );
        } else {
            log_event_with_fields(Event::PageEmpty, &[("page", page_str.as_str())]);
        }
        Ok(rows)
    }

    fn log_submitted(&self, query: &QueryDescription) {
        if Logger::enabled(Severity::Trace) {
            let explain = ExplainQuery::from_query(query).to_string();
            log_event_with_fields(Event::QuerySubmitted, &[("explain", explain.as_str())]);
        }
    }

    fn executor_failed(&self, err: X::Error) -> PageError<X::Error> {
        let message = err.to_string();
        log_event_with_fields(Event::ExecutorFailed, &[("error", message.as_str())]);
        PageError::Executor(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{ExecutorError, MemoryExecutor};
    use crate::query::{KeyBound, SortDirection};
    use serde_json::json;

    fn executor() -> MemoryExecutor {
        MemoryExecutor::new(
            [("a", 1), ("b", 2), ("c", 2), ("d", 3), ("e", 4)]
                .iter()
                .map(|(id, rank)| Document::from_value(json!({"_id": id, "rank": rank})).unwrap())
                .collect(),
        )
    }

    fn ids(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.id().as_str()).collect()
    }

    fn config(page_size: u64) -> PaginatorConfig {
        PaginatorConfig::new("rank", SortDirection::Asc).with_page_size(page_size)
    }

    #[test]
    fn test_zero_page_size_fails_fast() {
        let exec = executor();
        let result = Paginator::new(&exec, config(0));
        assert!(matches!(result, Err(ConfigError::ZeroPageSize)));
        assert_eq!(exec.round_trips(), 0);
    }

    #[tokio::test]
    async fn test_get_page_anchors_cursor() {
        let mut pager = Paginator::new(executor(), config(2)).unwrap();

        let rows = pager.get_page(1).await.unwrap();
        assert_eq!(ids(&rows), vec!["c", "d"]);
        assert_eq!(pager.current_page(), Some(1));
        assert_eq!(pager.cursor().lower_bound(), Some(&KeyBound::new(json!(2), "c")));
        assert_eq!(pager.cursor().upper_bound(), Some(&KeyBound::new(json!(3), "d")));
    }

    #[tokio::test]
    async fn test_overflowing_page_fails_fast() {
        let exec = executor();
        let mut pager = Paginator::new(&exec, config(2)).unwrap();

        let err = pager.get_page(u64::MAX).await.unwrap_err();
        assert!(err.is_contract_violation());
        assert_eq!(exec.round_trips(), 0);
        assert!(pager.cursor().is_fresh());
    }

    #[tokio::test]
    async fn test_previous_page_queries_reversed_once() {
        let exec = executor();
        let mut pager = Paginator::new(&exec, config(2)).unwrap();
        pager.get_page(1).await.unwrap();

        let rows = pager.previous_page().await.unwrap();
        assert_eq!(ids(&rows), vec!["a", "b"]);
        assert_eq!(exec.round_trips(), 2);

        let query = exec.last_query().unwrap();
        assert_eq!(query.sort, Some(SortSpec::asc("rank").reversed()));
        assert_eq!(query.window, Some(Window::first(2)));
        assert!(query.keyset.is_some());
    }

    #[tokio::test]
    async fn test_failed_round_trip_keeps_cursor() {
        let exec = executor();
        let mut pager = Paginator::new(&exec, config(2)).unwrap();
        pager.get_page(0).await.unwrap();
        let before = pager.cursor().clone();

        exec.fail_next(ExecutorError::unavailable("connection reset"));
        let err = pager.next_page().await.unwrap_err();

        assert_eq!(
            err.executor_error(),
            Some(&ExecutorError::unavailable("connection reset"))
        );
        assert_eq!(pager.cursor(), &before);
    }

    #[tokio::test]
    async fn test_num_pages_leaves_cursor() {
        let mut pager = Paginator::new(executor(), config(2)).unwrap();
        assert_eq!(pager.num_pages().await.unwrap(), 3);
        assert!(pager.cursor().is_fresh());

        pager.get_page(2).await.unwrap();
        assert_eq!(pager.num_pages().await.unwrap(), 3);
        assert_eq!(pager.current_page(), Some(2));
    }

    #[tokio::test]
    async fn test_reset() {
        let mut pager = Paginator::new(executor(), config(2)).unwrap();
        pager.get_page(1).await.unwrap();
        pager.reset();
        assert!(pager.cursor().is_fresh());

        let rows = pager.next_page().await.unwrap();
        assert_eq!(ids(&rows), vec!["a", "b"]);
        assert_eq!(pager.current_page(), Some(0));
    }
}
