//! Query executors for docpager
//!
//! The [`QueryExecutor`] trait is the only boundary between the paginator
//! and a document store. [`MemoryExecutor`] is a complete reference
//! implementation over an in-memory raw document set.
//!
//! # Execution Flow (strict order)
//!
//! 1. Resolve drafts against published documents
//! 2. Filter documents strictly according to predicates
//! 3. Apply the keyset predicate (if any)
//! 4. Apply sort with `_id` tiebreak
//! 5. Apply window
//! 6. Project and return ordered results

mod errors;
mod executor;
mod filters;
mod memory;
mod sorter;

pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult};
pub use executor::QueryExecutor;
pub use filters::PredicateFilter;
pub use memory::MemoryExecutor;
pub use sorter::ResultSorter;
