//! Document identifiers and the draft naming convention
//!
//! A draft shadows the published document whose identifier is its own
//! identifier with the `drafts.` prefix removed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved identifier prefix marking a draft document
pub const DRAFTS_PREFIX: &str = "drafts.";

/// Unique document identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates an identifier from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier carries the drafts prefix
    pub fn is_draft(&self) -> bool {
        self.0.starts_with(DRAFTS_PREFIX)
    }

    /// Identifier of the published document this one belongs to.
    ///
    /// For a published identifier this is the identifier itself.
    pub fn published_id(&self) -> &str {
        self.0.strip_prefix(DRAFTS_PREFIX).unwrap_or(&self.0)
    }

    /// Identifier of the draft that would shadow this document
    pub fn draft_id(&self) -> DocumentId {
        if self.is_draft() {
            self.clone()
        } else {
            DocumentId(format!("{}{}", DRAFTS_PREFIX, self.0))
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_detection() {
        assert!(DocumentId::new("drafts.post-1").is_draft());
        assert!(!DocumentId::new("post-1").is_draft());
        // Prefix must be at the start
        assert!(!DocumentId::new("post.drafts.1").is_draft());
    }

    #[test]
    fn test_published_id() {
        assert_eq!(DocumentId::new("drafts.post-1").published_id(), "post-1");
        assert_eq!(DocumentId::new("post-1").published_id(), "post-1");
    }

    #[test]
    fn test_draft_id() {
        assert_eq!(DocumentId::new("post-1").draft_id().as_str(), "drafts.post-1");
        assert_eq!(
            DocumentId::new("drafts.post-1").draft_id().as_str(),
            "drafts.post-1"
        );
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(DocumentId::new("a") < DocumentId::new("b"));
        assert!(DocumentId::new("b") < DocumentId::new("drafts.a"));
    }
}
