//! Documents and identifiers
//!
//! Documents are immutable JSON objects keyed by a string identifier.
//! Identifiers starting with `drafts.` denote drafts of the document named by
//! the remainder of the identifier.

mod document;
mod id;

pub use document::{Document, DocumentError, ID_FIELD};
pub use id::{DocumentId, DRAFTS_PREFIX};
