//! Explain output for query descriptions
//!
//! Produces deterministic, human-readable text describing what an executor
//! is being asked to do.

use std::fmt;

use super::description::QueryDescription;

/// Explain view of a query description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainQuery {
    /// Overlay rule
    pub overlay: String,
    /// Rendered filter predicates
    pub predicates: Vec<String>,
    /// Rendered keyset predicate
    pub keyset: Option<String>,
    /// Sort description
    pub sort: Option<String>,
    /// Window as offset and limit
    pub window: Option<(u64, u64)>,
    /// Projected fields
    pub projection: Vec<String>,
}

impl ExplainQuery {
    /// Creates an explain view from a description
    pub fn from_query(query: &QueryDescription) -> Self {
        let predicates = query
            .filter
            .iter()
            .map(|p| format!("{} {} {}", p.field, p.op.symbol(), p.op.operand()))
            .collect();

        let sort = query.sort.as_ref().map(|s| {
            format!("{} {}, _id {}", s.field, s.direction.as_str(), s.tiebreak.as_str())
        });

        Self {
            overlay: query.overlay.describe().to_string(),
            predicates,
            keyset: query.keyset.as_ref().map(|k| k.to_string()),
            sort,
            window: query.window.map(|w| (w.offset, w.limit)),
            projection: query.projection.clone(),
        }
    }
}

impl fmt::Display for ExplainQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN QUERY ===")?;
        writeln!(f, "Overlay: {}", self.overlay)?;
        if !self.predicates.is_empty() {
            writeln!(f, "Filter:")?;
            for pred in &self.predicates {
                writeln!(f, "  - {}", pred)?;
            }
        }
        if let Some(keyset) = &self.keyset {
            writeln!(f, "Keyset: {}", keyset)?;
        }
        if let Some(sort) = &self.sort {
            writeln!(f, "Sort: {}", sort)?;
        }
        if let Some((offset, limit)) = self.window {
            writeln!(f, "Window: [{}, {})", offset, offset.saturating_add(limit))?;
        }
        if !self.projection.is_empty() {
            writeln!(f, "Projection: {}", self.projection.join(", "))?;
        }
        Ok(())
    }
}
