//! docpager - keyset pagination over filtered, sorted document sets
//!
//! Documents live behind a [`executor::QueryExecutor`]. A
//! [`paginator::Paginator`] describes each page as a query (filter, draft
//! overlay, sort with `_id` tiebreak, window, keyset predicate) and keeps a
//! cursor on the boundary rows of the last page it fetched.
//!
//! Drafts (`drafts.<id>`) are only visible while their published
//! counterpart is absent; see [`overlay::DraftOverlay`].

pub mod document;
pub mod executor;
pub mod observability;
pub mod overlay;
pub mod paginator;
pub mod query;

pub use document::{Document, DocumentId};
pub use executor::{MemoryExecutor, QueryExecutor};
pub use paginator::{Cursor, PageError, PageResult, Paginator, PaginatorConfig};
pub use query::{Predicate, SortDirection};
