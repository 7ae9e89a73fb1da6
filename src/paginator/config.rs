//! Paginator configuration
//!
//! Supplied once at construction and immutable afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::{Predicate, SortDirection, SortSpec};

/// Errors raised while loading or validating a config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page size must be a positive integer")]
    ZeroPageSize,

    #[error("sort field must not be empty")]
    EmptySortField,

    #[error("invalid paginator config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Paginator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatorConfig {
    /// Caller filter (all combined with AND)
    #[serde(default)]
    pub filter: Vec<Predicate>,

    /// Fields to retrieve; empty retrieves every field
    #[serde(default)]
    pub projection: Vec<String>,

    /// Primary sort field
    pub sort_field: String,

    /// Primary sort direction (default: ascending)
    #[serde(default)]
    pub direction: SortDirection,

    /// Rows per page (default: 20)
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_size() -> u64 {
    20
}

impl PaginatorConfig {
    /// Creates a config with no filter, full projection and default page size
    pub fn new(sort_field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            filter: Vec::new(),
            projection: Vec::new(),
            sort_field: sort_field.into(),
            direction,
            page_size: default_page_size(),
        }
    }

    /// Parses and validates a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the page size
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Adds a filter predicate
    pub fn with_filter(mut self, predicate: Predicate) -> Self {
        self.filter.push(predicate);
        self
    }

    /// Sets the projection
    pub fn with_projection<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the caller contract
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.sort_field.trim().is_empty() {
            return Err(ConfigError::EmptySortField);
        }
        Ok(())
    }

    /// Sort spec in the configured direction with ascending `_id` tiebreak
    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::new(self.sort_field.clone(), self.direction)
    }

    /// Fields requested from the executor.
    ///
    /// The sort field is always included so page boundaries can be captured.
    pub fn effective_projection(&self) -> Vec<String> {
        if self.projection.is_empty() {
            return Vec::new();
        }
        let mut fields = self.projection.clone();
        if !fields.iter().any(|f| f == &self.sort_field) {
            fields.push(self.sort_field.clone());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_from_json() {
        let config = PaginatorConfig::from_json(r#"{"sortField": "publishedAt"}"#).unwrap();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.direction, SortDirection::Asc);
        assert!(config.filter.is_empty());
        assert!(config.projection.is_empty());
    }

    #[test]
    fn test_full_json() {
        let config = PaginatorConfig::from_json(
            r#"{
                "filter": [{"field": "_type", "op": {"eq": "post"}}],
                "projection": ["title"],
                "sortField": "rank",
                "direction": "descending",
                "pageSize": 5
            }"#,
        )
        .unwrap();

        assert_eq!(config.filter, vec![Predicate::eq("_type", json!("post"))]);
        assert_eq!(config.direction, SortDirection::Desc);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.effective_projection(), vec!["title", "rank"]);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = PaginatorConfig::from_json(r#"{"sortField": "rank", "pageSize": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_negative_page_size_rejected() {
        let err = PaginatorConfig::from_json(r#"{"sortField": "rank", "pageSize": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_sort_field_rejected() {
        let config = PaginatorConfig::new("  ", SortDirection::Asc);
        assert!(matches!(config.validate(), Err(ConfigError::EmptySortField)));
    }

    #[test]
    fn test_projection_keeps_sort_field_once() {
        let config = PaginatorConfig::new("rank", SortDirection::Asc).with_projection(["rank", "title"]);
        assert_eq!(config.effective_projection(), vec!["rank", "title"]);

        let config = PaginatorConfig::new("rank", SortDirection::Asc);
        assert!(config.effective_projection().is_empty());
    }

    #[test]
    fn test_sort_spec() {
        let sort = PaginatorConfig::new("rank", SortDirection::Desc).sort_spec();
        assert_eq!(sort, SortSpec::desc("rank"));
    }
}
