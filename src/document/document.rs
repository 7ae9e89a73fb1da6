//! Immutable documents as returned by a query executor

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use super::id::DocumentId;

/// Field name that always holds the document identifier
pub const ID_FIELD: &str = "_id";

/// Errors raised when building a document from raw JSON
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("document body must be a JSON object")]
    NotAnObject,

    #[error("document is missing a string `_id` field")]
    MissingId,
}

/// A single document.
///
/// The body is always a JSON object whose `_id` field mirrors `id`, so the
/// identifier can be addressed like any other field by filters and sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Document {
    id: DocumentId,
    body: Map<String, Value>,
}

impl Document {
    /// Creates a document from an identifier and a set of fields.
    ///
    /// Any `_id` present in `fields` is overwritten by `id`.
    pub fn new(id: impl Into<DocumentId>, mut fields: Map<String, Value>) -> Self {
        let id = id.into();
        fields.insert(ID_FIELD.to_string(), Value::String(id.as_str().to_string()));
        Self { id, body: fields }
    }

    /// Builds a document from a JSON object carrying an `_id` string
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let body = match value {
            Value::Object(map) => map,
            _ => return Err(DocumentError::NotAnObject),
        };
        let id = match body.get(ID_FIELD) {
            Some(Value::String(s)) => DocumentId::new(s.clone()),
            _ => return Err(DocumentError::MissingId),
        };
        Ok(Self { id, body })
    }

    /// Returns the document identifier
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns true if this document is a draft
    pub fn is_draft(&self) -> bool {
        self.id.is_draft()
    }

    /// Returns a field value, `_id` included
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.body.get(field)
    }

    /// Value of the sort field, `Null` when the field is absent
    pub fn sort_value(&self, field: &str) -> Value {
        self.get(field).cloned().unwrap_or(Value::Null)
    }

    /// Returns the document body
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Returns a copy holding only the listed fields plus `_id`.
    ///
    /// An empty projection keeps every field.
    pub fn project(&self, fields: &[String]) -> Document {
        if fields.is_empty() {
            return self.clone();
        }
        let body = self
            .body
            .iter()
            .filter(|(k, _)| k.as_str() == ID_FIELD || fields.iter().any(|f| f == *k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Document {
            id: self.id.clone(),
            body,
        }
    }
}

impl TryFrom<Value> for Document {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Document::from_value(value)
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_id_is_addressable_as_field() {
        let doc = Document::new("post-1", fields(json!({"title": "Hello"})));
        assert_eq!(doc.get("_id"), Some(&json!("post-1")));
        assert_eq!(doc.id().as_str(), "post-1");
    }

    #[test]
    fn test_new_overrides_body_id() {
        let doc = Document::new("real", fields(json!({"_id": "fake"})));
        assert_eq!(doc.get("_id"), Some(&json!("real")));
    }

    #[test]
    fn test_from_value_requires_object_with_id() {
        assert_eq!(
            Document::from_value(json!([1, 2])).unwrap_err(),
            DocumentError::NotAnObject
        );
        assert_eq!(
            Document::from_value(json!({"title": "x"})).unwrap_err(),
            DocumentError::MissingId
        );
        assert_eq!(
            Document::from_value(json!({"_id": 7})).unwrap_err(),
            DocumentError::MissingId
        );
    }

    #[test]
    fn test_sort_value_missing_is_null() {
        let doc = Document::from_value(json!({"_id": "a"})).unwrap();
        assert_eq!(doc.sort_value("rank"), Value::Null);
    }

    #[test]
    fn test_projection_keeps_id() {
        let doc = Document::from_value(json!({"_id": "a", "title": "t", "body": "b"})).unwrap();
        let projected = doc.project(&["title".to_string()]);
        assert_eq!(projected.body().len(), 2);
        assert_eq!(projected.get("title"), Some(&json!("t")));
        assert!(projected.get("body").is_none());

        assert_eq!(doc.project(&[]), doc);
    }

    #[test]
    fn test_serde_is_flat_object() {
        let doc: Document = serde_json::from_value(json!({"_id": "drafts.a", "n": 1})).unwrap();
        assert!(doc.is_draft());
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"_id": "drafts.a", "n": 1}));
    }
}
