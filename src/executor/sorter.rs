//! Result sorting for query execution
//!
//! Sorts by one primary field, then by `_id`, giving a total order.

use std::cmp::Ordering;

use serde_json::Value;

use crate::document::Document;
use crate::query::{SortDirection, SortSpec};

/// Sorts result documents
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts documents according to sort specification.
    pub fn sort(documents: &mut [Document], sort_spec: &SortSpec) {
        documents.sort_by(|a, b| Self::compare(a, b, sort_spec));
    }

    /// Compares two documents under the composite `(field, _id)` order
    pub fn compare(a: &Document, b: &Document, sort_spec: &SortSpec) -> Ordering {
        let primary = Self::compare_values(a.get(&sort_spec.field), b.get(&sort_spec.field));
        let primary = Self::directed(primary, sort_spec.direction);

        primary.then_with(|| Self::directed(a.id().cmp(b.id()), sort_spec.tiebreak))
    }

    fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// Compares two JSON values for sorting.
    ///
    /// Ordering rules:
    /// - missing == null
    /// - null < bool < number < string < array < object
    /// - For same types, natural ordering
    pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
        let a_val = a.unwrap_or(&Value::Null);
        let b_val = b.unwrap_or(&Value::Null);

        let type_order = |v: &Value| -> u8 {
            match v {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Number(_) => 2,
                Value::String(_) => 3,
                Value::Array(_) => 4,
                Value::Object(_) => 5,
            }
        };

        let a_type = type_order(a_val);
        let b_type = type_order(b_val);

        if a_type != b_type {
            return a_type.cmp(&b_type);
        }

        match (a_val, b_val) {
            (Value::Bool(a_b), Value::Bool(b_b)) => a_b.cmp(b_b),
            (Value::Number(a_n), Value::Number(b_n)) => {
                if let (Some(ai), Some(bi)) = (a_n.as_i64(), b_n.as_i64()) {
                    return ai.cmp(&bi);
                }
                let a_f = a_n.as_f64().unwrap_or(0.0);
                let b_f = b_n.as_f64().unwrap_or(0.0);
                a_f.partial_cmp(&b_f).unwrap_or(Ordering::Equal)
            }
            (Value::String(a_s), Value::String(b_s)) => a_s.cmp(b_s),
            // Null pairs, arrays and objects are not ordered among themselves
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_doc(id: &str, rank: i64) -> Document {
        Document::from_value(json!({"_id": id, "rank": rank})).unwrap()
    }

    fn ids(docs: &[Document]) -> Vec<&str> {
        docs.iter().map(|d| d.id().as_str()).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let mut docs = vec![make_doc("c", 30), make_doc("a", 20), make_doc("b", 25)];

        ResultSorter::sort(&mut docs, &SortSpec::asc("rank"));

        assert_eq!(ids(&docs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_descending() {
        let mut docs = vec![make_doc("c", 30), make_doc("a", 20), make_doc("b", 25)];

        ResultSorter::sort(&mut docs, &SortSpec::desc("rank"));

        assert_eq!(ids(&docs), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ties_broken_by_id_ascending() {
        // Input order must not leak into the result
        let mut docs = vec![make_doc("c", 25), make_doc("a", 25), make_doc("b", 25)];
        ResultSorter::sort(&mut docs, &SortSpec::asc("rank"));
        assert_eq!(ids(&docs), vec!["a", "b", "c"]);

        let mut docs = vec![make_doc("c", 25), make_doc("a", 25), make_doc("b", 25)];
        ResultSorter::sort(&mut docs, &SortSpec::desc("rank"));
        assert_eq!(ids(&docs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reversed_spec_is_exact_inverse() {
        let mut docs = vec![
            make_doc("b", 2),
            make_doc("d", 3),
            make_doc("a", 1),
            make_doc("c", 2),
        ];
        let sort = SortSpec::desc("rank");

        ResultSorter::sort(&mut docs, &sort);
        let forward: Vec<String> = docs.iter().map(|d| d.id().to_string()).collect();

        ResultSorter::sort(&mut docs, &sort.reversed());
        let mut backward: Vec<String> = docs.iter().map(|d| d.id().to_string()).collect();
        backward.reverse();

        assert_eq!(forward, backward);
        assert_eq!(forward, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn test_sort_by_string() {
        let mut docs = vec![
            Document::from_value(json!({"_id": "1", "name": "charlie"})).unwrap(),
            Document::from_value(json!({"_id": "2", "name": "alice"})).unwrap(),
            Document::from_value(json!({"_id": "3", "name": "bob"})).unwrap(),
        ];

        ResultSorter::sort(&mut docs, &SortSpec::asc("name"));

        assert_eq!(ids(&docs), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_missing_field_sorts_first() {
        let mut docs = vec![
            make_doc("a", 1),
            Document::from_value(json!({"_id": "z"})).unwrap(),
        ];
        ResultSorter::sort(&mut docs, &SortSpec::asc("rank"));
        assert_eq!(ids(&docs), vec!["z", "a"]);
    }

    #[test]
    fn test_compare_values_mixed_numbers() {
        assert_eq!(
            ResultSorter::compare_values(Some(&json!(1)), Some(&json!(1.5))),
            Ordering::Less
        );
        assert_eq!(
            ResultSorter::compare_values(Some(&json!(2)), Some(&json!(2.0))),
            Ordering::Equal
        );
        assert_eq!(
            ResultSorter::compare_values(Some(&json!(10)), Some(&json!("1"))),
            Ordering::Less
        );
    }
}
