//! Query descriptions
//!
//! The paginator never runs a query itself. It describes one and hands the
//! description to a [`crate::executor::QueryExecutor`].
//!
//! # Design Principles
//!
//! - Single sort field, always paired with an `_id` tiebreak
//! - Filters are opaque AND-composed predicates
//! - The overlay rule is part of every description
//! - Relative navigation uses keyset predicates, absolute navigation uses
//!   offset windows

mod ast;
mod description;
mod explain;
mod keyset;

pub use ast::{FilterOp, Predicate, SortDirection, SortSpec};
pub use description::{QueryDescription, Window};
pub use explain::ExplainQuery;
pub use keyset::{KeyBound, KeyOp, KeysetPredicate};
