//! Keyset (seek) predicates
//!
//! A keyset predicate selects the documents strictly after, or strictly
//! before, a boundary row in a composite `(field, _id)` order:
//!
//! ```text
//! field <op> bound.value OR (field == bound.value AND _id <id_op> bound.id)
//! ```
//!
//! Because `_id` is unique the composite key is a total order, so a page
//! boundary that falls inside a run of equal primary values neither skips
//! nor repeats a row.

use std::cmp::Ordering;
use std::fmt;

use serde_json::Value;

use super::ast::{SortDirection, SortSpec};
use crate::document::{Document, DocumentId};

/// Strict comparison used by a keyset predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOp {
    Gt,
    Lt,
}

impl KeyOp {
    /// Operator selecting rows later in the given direction
    fn later_in(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => KeyOp::Gt,
            SortDirection::Desc => KeyOp::Lt,
        }
    }

    /// Returns the opposite operator
    pub fn flip(self) -> Self {
        match self {
            KeyOp::Gt => KeyOp::Lt,
            KeyOp::Lt => KeyOp::Gt,
        }
    }

    /// True if `actual.cmp(bound)` satisfies this operator
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            KeyOp::Gt => ordering == Ordering::Greater,
            KeyOp::Lt => ordering == Ordering::Less,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            KeyOp::Gt => ">",
            KeyOp::Lt => "<",
        }
    }
}

/// Composite key of a boundary row: primary sort value plus identifier
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBound {
    /// Primary sort field value (`Null` if the row lacks the field)
    pub value: Value,
    /// Row identifier
    pub id: DocumentId,
}

impl KeyBound {
    pub fn new(value: Value, id: impl Into<DocumentId>) -> Self {
        Self {
            value,
            id: id.into(),
        }
    }

    /// Captures the composite key of `doc` for the given sort field
    pub fn of(doc: &Document, field: &str) -> Self {
        Self {
            value: doc.sort_value(field),
            id: doc.id().clone(),
        }
    }
}

/// Seek predicate injected by relative page navigation
#[derive(Debug, Clone, PartialEq)]
pub struct KeysetPredicate {
    /// Primary sort field
    pub field: String,
    /// Operator applied to the primary field
    pub primary: KeyOp,
    /// Operator applied to `_id` when primary values are equal
    pub tiebreak: KeyOp,
    /// Boundary row
    pub bound: KeyBound,
}

impl KeysetPredicate {
    /// Rows strictly after `bound` in the order described by `sort`
    pub fn after(sort: &SortSpec, bound: KeyBound) -> Self {
        Self {
            field: sort.field.clone(),
            primary: KeyOp::later_in(sort.direction),
            tiebreak: KeyOp::later_in(sort.tiebreak),
            bound,
        }
    }

    /// Rows strictly before `bound` in the order described by `sort`
    pub fn before(sort: &SortSpec, bound: KeyBound) -> Self {
        let after = Self::after(sort, bound);
        Self {
            primary: after.primary.flip(),
            tiebreak: after.tiebreak.flip(),
            ..after
        }
    }
}

impl fmt::Display for KeysetPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{field} {op} {value} || ({field} == {value} && _id {id_op} {id:?})",
            field = self.field,
            op = self.primary.symbol(),
            value = self.bound.value,
            id_op = self.tiebreak.symbol(),
            id = self.bound.id.as_str(),
        )
    }
}
