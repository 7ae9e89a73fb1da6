//! Draft overlay resolution
//!
//! Turns a raw document set into the logical document set seen by
//! everything downstream.
//!
//! ## Rule
//!
//! A document is visible iff it is published, or it is a draft whose
//! published counterpart is absent from the raw set. Every logical identity
//! therefore has exactly one visible representative: the published document
//! when it exists, otherwise its draft.
//!
//! The rule travels inside each query description so the executor can apply
//! it together with filtering, sorting and windowing in one round trip.
//! Executors that hold documents in memory call [`DraftOverlay::resolve`]
//! before any filter or window is applied; windowing after resolution keeps
//! offset math identical to a server-side evaluation.

use std::collections::HashSet;
use std::fmt;

use crate::document::Document;

/// Stateless overlay rule: published documents hide their drafts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftOverlay;

impl DraftOverlay {
    /// Evaluates visibility of one document against the raw identifier set
    pub fn is_visible(doc: &Document, raw_ids: &HashSet<&str>) -> bool {
        if !doc.is_draft() {
            return true;
        }
        !raw_ids.contains(doc.id().published_id())
    }

    /// Resolves a raw set into the logical set, preserving input order
    pub fn resolve(raw: &[Document]) -> Vec<Document> {
        let ids: HashSet<&str> = raw.iter().map(|d| d.id().as_str()).collect();
        raw.iter()
            .filter(|d| Self::is_visible(d, &ids))
            .cloned()
            .collect()
    }

    /// Short rule description used in explain output
    pub fn describe(&self) -> &'static str {
        "published documents hide drafts with the same published id"
    }
}

impl fmt::Display for DraftOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}
