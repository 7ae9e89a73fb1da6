//! Predicate filtering for query execution
//!
//! Filter predicates are strict: no type coercion, a missing or null field
//! never matches, and range operators only compare numbers with numbers and
//! strings with strings. Keyset predicates instead use the total sort order
//! so that they agree with [`ResultSorter`] on every value.

use std::cmp::Ordering;

use serde_json::Value;

use super::sorter::ResultSorter;
use crate::document::Document;
use crate::query::{FilterOp, KeysetPredicate, Predicate};

/// Evaluates predicates against documents
pub struct PredicateFilter;

impl PredicateFilter {
    /// Checks if a document matches all predicates
    pub fn matches(document: &Document, predicates: &[Predicate]) -> bool {
        predicates
            .iter()
            .all(|pred| Self::matches_predicate(document, pred))
    }

    /// Checks if a document lies on the selected side of a keyset bound
    pub fn matches_keyset(document: &Document, keyset: &KeysetPredicate) -> bool {
        let primary =
            ResultSorter::compare_values(document.get(&keyset.field), Some(&keyset.bound.value));

        match primary {
            Ordering::Equal => keyset.tiebreak.holds(document.id().cmp(&keyset.bound.id)),
            other => keyset.primary.holds(other),
        }
    }

    /// Checks if a document matches a single predicate
    fn matches_predicate(document: &Document, predicate: &Predicate) -> bool {
        let field_value = match document.get(&predicate.field) {
            Some(v) if !v.is_null() => v,
            _ => return false,
        };

        match &predicate.op {
            FilterOp::Eq(expected) => field_value == expected,
            FilterOp::Ne(expected) => field_value != expected,
            FilterOp::In(candidates) => candidates.iter().any(|c| c == field_value),
            FilterOp::Gte(bound) => {
                Self::range_cmp(field_value, bound).is_some_and(|o| o != Ordering::Less)
            }
            FilterOp::Gt(bound) => Self::range_cmp(field_value, bound) == Some(Ordering::Greater),
            FilterOp::Lte(bound) => {
                Self::range_cmp(field_value, bound).is_some_and(|o| o != Ordering::Greater)
            }
            FilterOp::Lt(bound) => Self::range_cmp(field_value, bound) == Some(Ordering::Less),
        }
    }

    /// Orders two values of the same comparable type, None otherwise
    fn range_cmp(actual: &Value, bound: &Value) -> Option<Ordering> {
        match (actual, bound) {
            (Value::Number(a), Value::Number(b)) => {
                if let (Some(ai), Some(bi)) = (a.as_i64(), b.as_i64()) {
                    return Some(ai.cmp(&bi));
                }
                a.as_f64()?.partial_cmp(&b.as_f64()?)
            }
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}
