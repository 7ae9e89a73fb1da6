//! Observable pagination events
//!
//! Events are explicit and typed. Each carries a fixed severity so call
//! sites only choose the event and its fields.

use std::fmt;

use super::logger::Severity;

/// Observable events emitted by a paginator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Paginator constructed from a validated config
    PaginatorCreated,
    /// Query description submitted to the executor
    QuerySubmitted,
    /// Page fetched and cursor repositioned
    PageFetched,
    /// Page came back empty; cursor left unchanged
    PageEmpty,
    /// Relative navigation requested from a fresh cursor, served as page 0
    CursorFallback,
    /// Cursor reset to fresh
    CursorReset,
    /// Logical document count computed
    PagesCounted,
    /// Executor round trip failed
    ExecutorFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::PaginatorCreated => "PAGINATOR_CREATED",
            Event::QuerySubmitted => "QUERY_SUBMITTED",
            Event::PageFetched => "PAGE_FETCHED",
            Event::PageEmpty => "PAGE_EMPTY",
            Event::CursorFallback => "CURSOR_FALLBACK",
            Event::CursorReset => "CURSOR_RESET",
            Event::PagesCounted => "PAGES_COUNTED",
            Event::ExecutorFailed => "EXECUTOR_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QuerySubmitted => Severity::Trace,
            Event::PageEmpty => Severity::Warn,
            Event::ExecutorFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
